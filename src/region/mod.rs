pub(crate) mod def;
pub(crate) mod group;
pub(crate) mod marker;
pub(crate) mod phase;
