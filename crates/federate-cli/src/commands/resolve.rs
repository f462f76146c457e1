//! Resolve command - find the API resource a key refers to

use std::io::Write;

use super::resolve_key;
use crate::config::DiscoverySource;
use crate::display::{OutputFormat, ResolvedView, print_resolved, render};
use crate::error::Result;

/// Run the resolve command
pub async fn run(key: &str, source: DiscoverySource<'_>, output: OutputFormat) -> Result<()> {
    let resource = resolve_key(key, source).await?;
    print_resolved(key, &resource);

    let document = render(&ResolvedView::new(&resource), output)?;
    std::io::stdout().write_all(document.as_bytes())?;
    Ok(())
}
