pub(crate) use folio::Result;

pub(crate) use anyhow::Context as _;
