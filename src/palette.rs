use crate::chat::{
    ChatApiResponse, ChatMessage, ChatRequestBody, ContentPart, ImageUrl, MessageContent,
};
use crate::constants::{
    CHAT_API_URL, DEFAULT_BUSINESS_TYPE, DEFAULT_COLOR_PREFERENCE, DEFAULT_COMPANY_NAME,
    DEFAULT_MOOD, DEFAULT_STYLE, IMAGE_SYSTEM_PROMPT, IMAGE_USER_PROMPT, MAX_COMPLETION_TOKENS,
    MIN_QUIZ_COLORS, MODEL, QUIZ_SYSTEM_PROMPT,
};
use crate::normalize::normalize;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE},
    Client,
};
use serde_json::{json, Value};
use std::{env, error::Error};

pub fn build_headers() -> Result<HeaderMap, Box<dyn Error>> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", env::var("OPENAI_API_KEY")?))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Endpoint for chat completions; `OPENAI_BASE_URL` overrides the default
/// OpenAI host, mirroring what the hosting environment configures.
pub fn api_url() -> String {
    match env::var("OPENAI_BASE_URL") {
        Ok(base) => format!("{}/chat/completions", base.trim_end_matches('/')),
        Err(_) => CHAT_API_URL.to_string(),
    }
}

/// Posts one chat request and returns the first choice's text, trimmed.
pub async fn send_chat_request(
    client: &Client,
    api_url: &str,
    body: &ChatRequestBody,
) -> Result<String, Box<dyn Error>> {
    let headers = build_headers()?;
    let response = client
        .post(api_url)
        .headers(headers)
        .json(body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let detail = response.text().await.unwrap_or_default();
        return Err(format!("request failed with status {}: {}", status, detail).into());
    }

    let api_response = response.json::<ChatApiResponse>().await?;
    let content = api_response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or("no content in model response")?;
    Ok(content.trim().to_string())
}

pub fn build_image_request(image_base64: &str) -> ChatRequestBody {
    ChatRequestBody {
        model: MODEL.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: MessageContent::Text(IMAGE_SYSTEM_PROMPT.to_string()),
            },
            ChatMessage {
                role: "user".to_string(),
                content: MessageContent::Parts(vec![
                    ContentPart::Text {
                        text: IMAGE_USER_PROMPT.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/jpeg;base64,{}", image_base64),
                        },
                    },
                ]),
            },
        ],
        max_tokens: MAX_COMPLETION_TOKENS,
        temperature: None,
        seed: None,
    }
}

fn text_field<'a>(quiz: &'a Value, key: &str, default: &'a str) -> &'a str {
    quiz.get(key).and_then(Value::as_str).unwrap_or(default)
}

pub fn build_quiz_prompt(quiz: &Value) -> String {
    let company_name = text_field(quiz, "companyName", DEFAULT_COMPANY_NAME);
    let business_type = text_field(quiz, "businessType", DEFAULT_BUSINESS_TYPE);
    let style = text_field(quiz, "style", DEFAULT_STYLE);
    let mood = text_field(quiz, "mood", DEFAULT_MOOD);
    let colors_preference = text_field(quiz, "colors", DEFAULT_COLOR_PREFERENCE);

    format!(
        r##"Create a UNIQUE and professional color palette for this brand:

Company Name: {company_name}
Business Type: {business_type}
Style: {style}
Mood: {mood}
Color Preference: {colors_preference}

IMPORTANT: Generate 6 DIFFERENT, harmonious hex colors that perfectly match this brand's identity.
Be creative and make each palette unique based on the inputs above.

Return ONLY a JSON object in this format:
{{"palette": ["#hex1", "#hex2", "#hex3", "#hex4", "#hex5", "#hex6"]}}

No markdown, no explanations, just the JSON."##
    )
}

pub fn build_quiz_request(quiz: &Value) -> ChatRequestBody {
    ChatRequestBody {
        model: MODEL.to_string(),
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: MessageContent::Text(QUIZ_SYSTEM_PROMPT.to_string()),
            },
            ChatMessage {
                role: "user".to_string(),
                content: MessageContent::Text(build_quiz_prompt(quiz)),
            },
        ],
        max_tokens: MAX_COMPLETION_TOKENS,
        // Maximum variability, no seed: repeated runs should differ.
        temperature: Some(1.0),
        seed: None,
    }
}

fn palette_len(palette: &serde_json::Map<String, Value>) -> usize {
    palette
        .get("palette")
        .and_then(Value::as_array)
        .map_or(0, Vec::len)
}

/// Extracts a palette from an encoded image. Always returns a JSON string,
/// either `{"palette": [...]}` or `{"error": "..."}`.
pub async fn extract_palette(client: &Client, api_url: &str, image_base64: &str) -> String {
    eprintln!("Starting image palette extraction...");
    match run_image_extraction(client, api_url, image_base64).await {
        Ok(result) => result,
        Err(e) => {
            let message = format!("Error in extract_palette: {}", e);
            eprintln!("{}", message);
            json!({ "error": message }).to_string()
        }
    }
}

async fn run_image_extraction(
    client: &Client,
    api_url: &str,
    image_base64: &str,
) -> Result<String, Box<dyn Error>> {
    let request = build_image_request(image_base64);
    let reply = send_chat_request(client, api_url, &request).await?;
    eprintln!("Raw model reply: {}", reply);

    let palette = normalize(&reply)?;
    eprintln!("Successfully extracted {} colors", palette_len(&palette));
    Ok(serde_json::to_string(&palette)?)
}

/// Generates a brand palette from quiz answers. Always returns a JSON string,
/// either `{"palette": [...]}` or `{"error": "..."}`.
pub async fn generate_palette(client: &Client, api_url: &str, quiz: &Value) -> String {
    eprintln!(
        "Generating palette for: {}",
        text_field(quiz, "companyName", DEFAULT_COMPANY_NAME)
    );
    eprintln!(
        "Quiz data: Type={}, Style={}, Mood={}, Colors={}",
        text_field(quiz, "businessType", DEFAULT_BUSINESS_TYPE),
        text_field(quiz, "style", DEFAULT_STYLE),
        text_field(quiz, "mood", DEFAULT_MOOD),
        text_field(quiz, "colors", DEFAULT_COLOR_PREFERENCE),
    );

    match run_quiz_generation(client, api_url, quiz).await {
        Ok(result) => result,
        Err(e) => {
            let message = format!("Error in generate_palette: {}", e);
            eprintln!("{}", message);
            json!({ "error": message }).to_string()
        }
    }
}

async fn run_quiz_generation(
    client: &Client,
    api_url: &str,
    quiz: &Value,
) -> Result<String, Box<dyn Error>> {
    let request = build_quiz_request(quiz);
    let reply = send_chat_request(client, api_url, &request).await?;
    eprintln!("Raw model reply: {}", reply);

    let palette = normalize(&reply)?;
    let count = palette_len(&palette);
    if count < MIN_QUIZ_COLORS {
        return Err(format!(
            "Invalid palette: expected {}+ colors, got {}",
            MIN_QUIZ_COLORS, count
        )
        .into());
    }

    eprintln!("Successfully generated {} colors", count);
    Ok(serde_json::to_string(&palette)?)
}
