//! Prompt text sent to the completion service.

use firstaid_core::LocationQuery;

pub const IMAGE_ANALYSIS_PROMPT: &str =
    "Describe clearly and medically what visible injury or condition appears in this image.";

pub const EMERGENCY_ASSISTANT_ROLE: &str = "You are a helpful emergency assistant.";

/// Prompt asking for step-by-step first aid for `description`.
#[must_use]
pub fn first_aid_prompt(description: &str) -> String {
    let description = description.trim().trim_end_matches('.');
    format!("Provide concise, safe, step-by-step first aid instructions for: {description}.")
}

/// Prompt asking for the `count` nearest hospitals, one numbered line each.
///
/// The line format here is the grammar [`crate::parse::parse_facilities`]
/// reads back.
#[must_use]
pub fn facility_search_prompt(query: &LocationQuery, count: u32) -> String {
    let target = if count == 1 {
        "the nearest public or general hospital".to_string()
    } else {
        format!("the top {count} nearest public or general hospitals")
    };

    let location = match query {
        LocationQuery::Text(text) => format!("User location: {text}"),
        LocationQuery::Coordinates(coords) => format!(
            "User location: latitude {:.6}, longitude {:.6}\n\
             These are exact GPS coordinates; search around this point directly.",
            coords.lat(),
            coords.lon()
        ),
    };

    format!(
        "Find {target} near the user's requested location.\n\
         Return results as a numbered list with the hospital name and full address, \
         one hospital per line, formatted as:\n\
         <number>. <hospital name>, <full address> — Coordinates: <latitude>, <longitude>\n\
         Leave out the coordinates part if you do not know them.\n\n\
         {location}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_aid_prompt_embeds_description_once_terminated() {
        assert_eq!(
            first_aid_prompt(" deep cut on forearm, bleeding. "),
            "Provide concise, safe, step-by-step first aid instructions for: deep cut on forearm, bleeding."
        );
    }

    #[test]
    fn text_search_prompt_names_the_location() {
        let q = LocationQuery::text("Austin, TX").unwrap();
        let prompt = facility_search_prompt(&q, 3);
        assert!(prompt.contains("top 3 nearest public or general hospitals"));
        assert!(prompt.ends_with("User location: Austin, TX"));
    }

    #[test]
    fn coordinate_search_prompt_contains_both_values() {
        let q = LocationQuery::coordinates(30.2672, -97.7431).unwrap();
        let prompt = facility_search_prompt(&q, 3);
        assert!(prompt.contains("30.2672"), "{prompt}");
        assert!(prompt.contains("-97.7431"), "{prompt}");
    }

    #[test]
    fn single_facility_prompt_uses_singular() {
        let q = LocationQuery::text("Reno").unwrap();
        assert!(facility_search_prompt(&q, 1).contains("the nearest public or general hospital "));
    }
}
