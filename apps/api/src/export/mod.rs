// Export pipeline: validation gate, print wrappers and the pluggable PDF backend.
// Both export paths render through the same assembler as the live preview.

pub mod handlers;
pub mod pdf;
pub mod print;
pub mod validation;
