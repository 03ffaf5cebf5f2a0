pub(crate) mod export;
pub(crate) mod meta;
pub(crate) mod relations;
pub(crate) mod shared;

#[cfg(test)]
pub(crate) mod testing;
