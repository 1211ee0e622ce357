pub(crate) mod reducer;
pub(crate) mod view;
