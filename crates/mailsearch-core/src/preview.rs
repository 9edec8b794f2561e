//! Preview of the Microsoft Graph request read_emails.py issues
//!
//! Nothing here talks to the network. It follows how the script builds its
//! query so `mailsearch resolve` can show what a request will do.
//!
//! Quotes in the term are shown escaped, as a valid OData literal or
//! `$search` phrase needs them. read_emails.py interpolates the term as-is,
//! so for such terms a note says the script's request differs.

use crate::params::{Count, Invocation, Scope, SearchParameters};
use serde::Serialize;

const SEARCH_SELECT: &str =
    "id,subject,from,toRecipients,receivedDateTime,bodyPreview,isRead,hasAttachments";
const LIST_SELECT: &str = "subject,from,receivedDateTime,bodyPreview,isRead,hasAttachments";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphQueryPreview {
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    /// Work the script does beyond the single request
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl GraphQueryPreview {
    /// Build the preview
    ///
    /// `mailbox` is the script's `EMAIL_ADDRESS`; `None` targets `/me`.
    pub fn for_invocation(invocation: &Invocation, mailbox: Option<&str>) -> Self {
        let user = match mailbox {
            Some(address) => format!("/users/{}", address),
            None => "/me".to_string(),
        };
        match invocation {
            Invocation::Search(params) => search_preview(&user, params),
            Invocation::List { count, .. } => list_preview(&user, *count),
        }
    }

    /// `endpoint?k=v&k=v`, unencoded
    pub fn to_request_line(&self) -> String {
        let query: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        format!("GET {}?{}", self.endpoint, query.join("&"))
    }
}

fn search_preview(user: &str, params: &SearchParameters) -> GraphQueryPreview {
    let mut query = vec![
        ("$top".to_string(), params.count.to_string()),
        ("$select".to_string(), SEARCH_SELECT.to_string()),
    ];
    let mut notes = Vec::new();

    match params.scope {
        Scope::Subject => query.push((
            "$filter".to_string(),
            format!("contains(subject, '{}')", odata_string(&params.term)),
        )),
        Scope::Body | Scope::Both => {
            query.push(("$search".to_string(), search_phrase(&params.term)));
        }
    }
    if params.scope == Scope::Body {
        notes.push("results are narrowed to messages whose bodyPreview contains the term".to_string());
    }
    if params.term.contains(&['\'', '"'][..]) {
        notes.push(
            "quotes are shown escaped; read_emails.py sends the term unescaped".to_string(),
        );
    }
    if params.full_body {
        notes.push("one extra request per result fetches the full body".to_string());
    }

    GraphQueryPreview {
        endpoint: format!("{}/messages", user),
        query,
        notes,
    }
}

fn list_preview(user: &str, count: Count) -> GraphQueryPreview {
    GraphQueryPreview {
        endpoint: format!("{}/mailFolders/inbox/messages", user),
        query: vec![
            ("$top".to_string(), count.to_string()),
            ("$select".to_string(), LIST_SELECT.to_string()),
            ("$orderby".to_string(), "receivedDateTime DESC".to_string()),
        ],
        notes: Vec::new(),
    }
}

/// OData string literal body: single quotes doubled
fn odata_string(term: &str) -> String {
    term.replace('\'', "''")
}

/// `$search` phrase: wrapped in double quotes, inner ones backslash-escaped
fn search_phrase(term: &str) -> String {
    format!("\"{}\"", term.replace('"', "\\\""))
}
