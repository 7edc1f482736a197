pub(crate) mod generate;
pub(crate) mod inspect;
pub(crate) mod sign;
pub(crate) mod verify;
