//! Movement domain: system modules for the character step.

pub(crate) mod input;
pub(crate) mod platforms;
pub(crate) mod step;

pub(crate) use input::read_input;
pub(crate) use platforms::update_platform_pass_through;
pub(crate) use step::step_characters;
