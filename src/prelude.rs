pub use anyhow::{bail, Context as _, Result};
