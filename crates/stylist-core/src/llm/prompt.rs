//! Instruction prompt shared by both providers.
//!
//! The prompt is a contract the model is asked to honor, not one it is
//! guaranteed to; the response interpreter enforces what it can.

/// Keys the model must return, in validation order.
pub const RESULT_KEYS: [&str; 5] = [
    "objectiveDescription",
    "styleAnalysis",
    "isStyleMatch",
    "outfitSuggestion",
    "occasionAnalysis",
];

/// Build the style-match instruction prompt.
pub fn build_style_prompt(style_profile: &str, language: &str) -> String {
    let mut prompt = String::with_capacity(1600 + style_profile.len());

    prompt.push_str(
        "You are a fashion assistant for visually impaired users. \
         You will be provided with several images of the same product, \
         showing it from different angles or in different contexts. \
         Synthesize the information from all images to create one cohesive analysis. ",
    );
    prompt.push_str(&format!(
        "You MUST provide your entire JSON response, including all text values, \
         in the following language: {language}.\n"
    ));
    prompt.push_str(
        "You MUST respond with a valid JSON object only, and nothing else. \
         Do not include any introductory text or markdown formatting.\n",
    );
    prompt.push_str("The JSON object must have five specific keys:\n");
    prompt.push_str(
        "1. \"objectiveDescription\": (string) A neutral, factual description of the item, \
         combining details from all provided images.\n",
    );
    prompt.push_str(
        "2. \"styleAnalysis\": (string) A personalized comparison to the user's style, \
         explaining in a friendly tone why it does or does not match.\n",
    );
    prompt.push_str(
        "3. \"isStyleMatch\": (boolean) A simple true or false based on your final recommendation.\n",
    );
    prompt.push_str(
        "4. \"outfitSuggestion\": (string or null) If the item is a style match \
         (isStyleMatch is true), provide a brief suggestion for a complete outfit. \
         If it is not a match, this key's value MUST be null.\n",
    );
    prompt.push_str(
        "5. \"occasionAnalysis\": (string) Briefly describe for what type of occasions \
         this item would be appropriate (e.g., \"casual wear, meetings with friends\" \
         or \"formal events, business meetings\").\n\n",
    );
    prompt.push_str(&format!("User's Style Profile: \"{style_profile}\""));

    prompt
}
