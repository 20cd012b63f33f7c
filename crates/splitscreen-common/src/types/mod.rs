mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_landscape_check() {
        assert!(Rect::from_size(1200.0, 800.0).is_landscape());
        assert!(!Rect::from_size(800.0, 1200.0).is_landscape());
        // Square counts as portrait: width must strictly exceed height.
        assert!(!Rect::from_size(900.0, 900.0).is_landscape());
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::from_size(1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn pane_index_display_is_one_based() {
        assert_eq!(PaneIndex(0).to_string(), "pane-1");
        assert_eq!(PaneIndex(3).to_string(), "pane-4");
    }

    #[test]
    fn pane_index_sound_slot() {
        assert_eq!(PaneIndex(0).sound_slot(), 1);
        assert_eq!(PaneIndex::from_sound_slot(0), None);
        assert_eq!(PaneIndex::from_sound_slot(2), Some(PaneIndex(1)));
    }

    #[test]
    fn max_panes_is_four() {
        assert_eq!(MAX_PANES, 4);
    }
}
