//! Lookup command handler

use anyhow::Result;

use wcgen::presenter::WordLookup;

use super::Context;

/// Frequency line followed by each context sentence.
pub fn render_lookup(lookup: &WordLookup) -> String {
    let mut out = format!("{}\nFrequency: {}\nContext:\n", lookup.word, lookup.frequency);
    if lookup.context.is_empty() {
        out.push_str("  No context found.\n");
    }
    for sentence in &lookup.context {
        out.push_str(&format!("  - {}\n", sentence));
    }
    out
}

#[cfg(not(tarpaulin_include))]
pub async fn handle(ctx: &Context, id: &str, word: &str) -> Result<()> {
    let presenter = ctx.open_permalink(id).await?;
    print!("{}", render_lookup(&presenter.lookup(word)));
    Ok(())
}
