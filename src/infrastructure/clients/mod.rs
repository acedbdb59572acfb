pub(crate) mod ffhb;
