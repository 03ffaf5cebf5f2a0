use crate::platform::UserRecord;

/// Header line of every roster file.
pub const HEADER: &str = "Username,URL";

/// Render users as roster text.
///
/// Rows are `login,html_url` joined by `\n` after the header, with no
/// trailing newline and no quoting. An empty list renders as the header
/// followed by a single `\n`.
pub fn render_csv(users: &[UserRecord]) -> String {
    for user in users {
        if user.login.contains(',') || user.html_url.contains(',') {
            tracing::warn!(
                login = %user.login,
                "Field contains a comma; the row will not load back intact"
            );
        }
    }

    let rows = users
        .iter()
        .map(|u| format!("{},{}", u.login, u.html_url))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{HEADER}\n{rows}")
}

/// Parse roster text into users.
///
/// The first line is taken as the header and skipped. Blank rows are
/// ignored, `\r` line endings are tolerated, and each row splits on its
/// first comma. A row without a comma yields a login with an empty URL.
pub fn parse_csv(text: &str) -> Vec<UserRecord> {
    text.split('\n')
        .skip(1)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once(',') {
            Some((login, url)) => UserRecord::new(login, url),
            None => UserRecord::new(line, ""),
        })
        .collect()
}
