//! Resolution pipeline — one request string to a played track (or a miss).

use jockey_core::{
    error::JockeyError,
    message::Track,
    traits::{Player, Provider},
};

/// Outcome of resolving one request.
pub(super) struct Resolution {
    /// The search query derived from the provider reply.
    pub query: String,
    /// The played track, or `None` when the search missed.
    pub track: Option<Track>,
}

/// Build the song-selection instruction for a request.
///
/// The output-format contract lives entirely in this text; the reply is
/// fed to search as-is, line breaks excepted.
pub(super) fn build_prompt(request: &str) -> String {
    format!(
        "Request: pick exactly one song that answers the request \"{request}\".\n\
         Output format: track name - artist name\n\
         Do not include any text other than the output format in your reply."
    )
}

/// Resolve a request: provider completion, then search-and-play.
pub(super) async fn resolve(
    provider: &dyn Provider,
    player: &dyn Player,
    request: &str,
) -> Result<Resolution, JockeyError> {
    let prompt = build_prompt(request);
    println!("\n{}\n{prompt}", console::style("Prompt").bold());

    let reply = provider.complete(&prompt).await?;
    println!("{}: {reply}", console::style("Reply").bold());

    let query = reply.replace(['\r', '\n'], "");
    let track = player.search_and_play(&query).await?;

    Ok(Resolution { query, track })
}
