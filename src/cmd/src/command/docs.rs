use common::config::Config;
use common::layout::Layout;
use datagen::generate_documents;
use tracing::info;

use crate::error::Result;

pub fn run(cfg: &Config) -> Result<()> {
    let layout = Layout::new(&cfg.volume.path);
    for path in generate_documents(&layout)? {
        info!("{}", path.display());
    }

    Ok(())
}
