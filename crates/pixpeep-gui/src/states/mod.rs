mod textures;
mod ui;

pub use textures::SlotTextures;
pub use ui::UIState;
