//! Tests for group progress tracking

#[cfg(test)]
mod tests {
    use tilesmith::io::progress::ProgressManager;

    // Tests the shared bar handle advances the manager
    // Verified by handing out a fresh bar instead of a clone
    #[test]
    fn test_bar_handle_is_shared() {
        let manager = ProgressManager::hidden(3);
        manager.bar().inc(2);

        assert_eq!(manager.position(), 2);
        assert_eq!(manager.bar().length(), Some(3));
    }

    // Tests a visible manager can be created and finished
    // Verified by panicking on an invalid template
    #[test]
    fn test_visible_manager_finishes() {
        let manager = ProgressManager::new(1, "big-tile");
        manager.bar().inc(1);
        manager.finish("done");

        assert_eq!(manager.position(), 1);
        assert!(manager.bar().is_finished());
    }
}
