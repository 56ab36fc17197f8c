mod button;
pub use button::{Button, ButtonVariant};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;
