pub const CHAT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const MODEL: &str = "gpt-4.1-mini";

pub const MODE_IMAGE: &str = "image_palette";
pub const MODE_QUIZ: &str = "quiz_palette";

// Replies are short JSON objects, so a small cap is plenty.
pub const MAX_COMPLETION_TOKENS: u32 = 500;
pub const MIN_QUIZ_COLORS: usize = 6;

pub const DEFAULT_COMPANY_NAME: &str = "Company";
pub const DEFAULT_BUSINESS_TYPE: &str = "modern business";
pub const DEFAULT_STYLE: &str = "modern";
pub const DEFAULT_MOOD: &str = "professional";
pub const DEFAULT_COLOR_PREFERENCE: &str = "vibrant";

pub const IMAGE_SYSTEM_PROMPT: &str = r##"You are a color palette expert. Extract dominant colors from images. Return ONLY a JSON object: {"palette": ["#hex1", "#hex2", ...]}"##;

pub const IMAGE_USER_PROMPT: &str =
    "Extract 6-8 dominant and beautiful colors from this image. Return ONLY a JSON object with the palette array.";

pub const QUIZ_SYSTEM_PROMPT: &str = r##"You are an expert color palette designer. You create UNIQUE palettes for each request.

CRITICAL RULES:
1. ALWAYS generate DIFFERENT colors based on the brand's characteristics
2. Return ONLY valid JSON: {"palette": ["#hex1", "#hex2", ...]}
3. No markdown, no explanations
4. Each palette must be unique and creative
5. Colors must be harmonious and professional"##;
