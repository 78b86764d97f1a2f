use pixpeep_core::shell::Slot;

/// GPU copies of the two loaded images.
#[derive(Default)]
pub struct SlotTextures {
    first: Option<egui::TextureHandle>,
    second: Option<egui::TextureHandle>,
}

impl SlotTextures {
    pub fn get(&self, slot: Slot) -> Option<&egui::TextureHandle> {
        match slot {
            Slot::First => self.first.as_ref(),
            Slot::Second => self.second.as_ref(),
        }
    }

    pub fn set(&mut self, slot: Slot, texture: egui::TextureHandle) {
        match slot {
            Slot::First => self.first = Some(texture),
            Slot::Second => self.second = Some(texture),
        }
    }
}
