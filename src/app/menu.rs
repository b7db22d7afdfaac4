// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/menu.rs
//
// Editor menu entries.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SaveAs,
    Rotate,
    Resize,
    FlipHorizontal,
    FlipVertical,
    Edit,
}

impl MenuAction {
    pub const ALL: [Self; 6] = [
        Self::SaveAs,
        Self::Rotate,
        Self::Resize,
        Self::FlipHorizontal,
        Self::FlipVertical,
        Self::Edit,
    ];

    /// Crop requests return a fixed region, so resizing is not offered.
    pub fn is_visible(self, is_crop_intent: bool) -> bool {
        match self {
            Self::Resize => !is_crop_intent,
            _ => true,
        }
    }

    /// Whether the action works on the loaded image.
    pub fn needs_image(self) -> bool {
        !matches!(self, Self::Edit)
    }
}

/// Menu entries shown for the given mode, in menu order.
pub fn visible_items(is_crop_intent: bool) -> Vec<MenuAction> {
    MenuAction::ALL
        .into_iter()
        .filter(|action| action.is_visible(is_crop_intent))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_hidden_only_in_crop_mode() {
        for crop in [false, true] {
            assert_eq!(MenuAction::Resize.is_visible(crop), !crop);
        }
        assert_eq!(visible_items(false).len(), 6);
        assert_eq!(
            visible_items(true),
            vec![
                MenuAction::SaveAs,
                MenuAction::Rotate,
                MenuAction::FlipHorizontal,
                MenuAction::FlipVertical,
                MenuAction::Edit,
            ]
        );
    }
}
