mod common;
mod pool_with_cache;
mod synth_template;
