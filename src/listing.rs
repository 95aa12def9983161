use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub index: u32,
    pub name: String,
}

// Listing lines look like `  4 "vec3_sum_manual" [42]`
pub fn entries(listing: &str) -> Vec<Entry> {
    let pattern = Regex::new(r#"^\s*(\d+) "([^"]*)""#).unwrap();

    listing
        .lines()
        .filter_map(|line| {
            let captures = pattern.captures(line)?;
            let index = captures[1].parse().ok()?;

            Some(Entry {
                index,
                name: captures[2].to_string(),
            })
        })
        .collect()
}

// The upper bound is the index on the last line that looks like an entry,
// not the largest index anywhere in the listing
pub fn last_entry_index(listing: &str) -> Option<u32> {
    let pattern = Regex::new(r#"^\s*(\d+) ""#).unwrap();

    let mut last = None;

    for line in listing.lines() {
        if let Some(captures) = pattern.captures(line) {
            if let Ok(index) = captures[1].parse::<u32>() {
                last = Some(index);
            }
        }
    }

    last
}
