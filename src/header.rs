use std::fmt;

pub const HEADER_MARKER: &str = "[From the U.S. Government Publishing Office";
pub const NAME_NOT_FOUND: &str = "NAME NOT FOUND";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Republican,
    Democrat,
    Independent,
    NotFound,
}

impl Party {
    fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "Republican" => Some(Party::Republican),
            "Democrat" => Some(Party::Democrat),
            "Independent" => Some(Party::Independent),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Party::Republican => "Republican",
            Party::Democrat => "Democrat",
            Party::Independent => "Independent",
            Party::NotFound => "PARTY NOT FOUND",
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParty {
    pub name: String,
    pub party: Party,
}

impl NameParty {
    /// Stand-in used when the header marker is missing.
    pub fn placeholder() -> Self {
        NameParty {
            name: NAME_NOT_FOUND.to_string(),
            party: Party::NotFound,
        }
    }
}

/// Read the legislator's name and party from the comma-separated line that
/// follows the GPO header bracket.
///
/// The party sits in the first, second or third comma group depending on
/// whether the name carries suffixes ("SMITH, JR., M.D., Republican"); any
/// groups before it are folded back into the name. `None` when the header
/// marker is missing.
pub fn extract_name_party(text: &str) -> Option<NameParty> {
    let (_, after) = text.split_once(HEADER_MARKER)?;
    let after = after.split_once(']').map_or(after, |(_, rest)| rest).trim_start();

    let parts: Vec<&str> = after.splitn(5, ',').map(str::trim).collect();
    let group = |i: usize| parts.get(i).copied().unwrap_or("");
    let name_chunk = group(0);

    let (name, party) = if let Some(p) = Party::from_keyword(group(1)) {
        (name_chunk.to_string(), p)
    } else if let Some(p) = Party::from_keyword(group(2)) {
        (format!("{} {}", name_chunk, group(1)), p)
    } else if let Some(p) = Party::from_keyword(group(3)) {
        let suffix = [group(1), group(2)]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        (format!("{} {}", name_chunk, suffix), p)
    } else {
        (name_chunk.to_string(), Party::NotFound)
    };

    Some(NameParty {
        name: title_case(&name),
        party,
    })
}

/// Uppercase a letter that follows a non-letter, lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}
