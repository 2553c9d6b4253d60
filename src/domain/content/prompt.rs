//! Instruction prompt sent to the model.

/// Builds the instruction asking the model for a single JSON slide object.
pub fn build_slide_prompt(user_prompt: &str) -> String {
    format!(
        r#"Create a professional presentation slide based on this request: "{prompt}"

Respond ONLY with a valid JSON object in exactly this format (no markdown, no code fences, no commentary):
{{
    "title": "A clear, engaging slide title",
    "content": "A brief 1-2 sentence overview of the topic",
    "bullet_points": ["Key point 1", "Key point 2", "Key point 3", "Key point 4", "Key point 5"],
    "design_theme": "professional",
    "layout_type": "bullet-list"
}}

Example for the request "renewable energy":
{{
    "title": "The Power of Renewable Energy",
    "content": "Renewable energy sources are transforming how we power our world.",
    "bullet_points": ["Solar capacity has grown rapidly", "Wind power is cost-competitive", "Storage technology is improving", "Jobs are growing in the sector", "Emissions fall as adoption rises"],
    "design_theme": "professional",
    "layout_type": "bullet-list"
}}

Use at most 5 bullet points. Respond ONLY with the JSON object."#,
        prompt = user_prompt.trim()
    )
}
