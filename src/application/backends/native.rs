//! Native notification center backend

use tracing::warn;

use crate::application::ports::NativeCenter;

/// Hand title and body to the OS notification center
pub fn render(center: &dyn NativeCenter, title: &str, body: &str) {
    if let Err(e) = center.show(title, body) {
        warn!(error = %e, "native notification not delivered");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::NativeCenterError;
    use std::cell::Cell;

    struct Unavailable {
        attempts: Cell<u32>,
    }

    impl NativeCenter for Unavailable {
        fn show(&self, _: &str, _: &str) -> Result<(), NativeCenterError> {
            self.attempts.set(self.attempts.get() + 1);
            Err(NativeCenterError::SendFailed("denied".to_string()))
        }
    }

    #[test]
    fn failure_is_absorbed_without_retry() {
        let center = Unavailable {
            attempts: Cell::new(0),
        };
        render(&center, "t", "b");
        assert_eq!(center.attempts.get(), 1);
    }
}
