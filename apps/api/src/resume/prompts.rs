// Resume parsing LLM prompt templates.
// All prompts for the resume module are defined here.

pub const RESUME_PARSE_SYSTEM: &str = "\
You are an expert resume parser. \
Extract all information from the provided resume into structured JSON. \
You MUST respond with valid JSON only — no markdown fences, no explanations. \
If a field is not found, use an empty string for strings and an empty array \
for arrays. Never invent information that is not in the resume.";

pub const RESUME_PARSE_PROMPT: &str = r#"Analyze the following resume content and extract all information into a structured JSON object.

The JSON structure MUST match this exact format:
{
    "personal": {
        "fullName": "string",
        "title": "string (job title/role)",
        "email": "string",
        "phone": "string",
        "location": "string (city, country)",
        "website": "string (personal website URL if any)",
        "linkedin": "string (LinkedIn URL if any)",
        "github": "string (GitHub URL if any)",
        "twitter": "string (Twitter/X URL if any)",
        "summary": "string (professional summary/objective)"
    },
    "education": [
        {
            "degree": "string (degree name)",
            "school": "string (institution name)",
            "location": "string",
            "startYear": "string (YYYY)",
            "endYear": "string (YYYY or 'Present')",
            "gpa": "string (if mentioned)",
            "description": "string (relevant coursework, honors, etc.)"
        }
    ],
    "experience": [
        {
            "title": "string (job title)",
            "company": "string",
            "location": "string",
            "startDate": "string (YYYY-MM or YYYY)",
            "endDate": "string (YYYY-MM, YYYY, or 'Present')",
            "current": boolean (true if currently working here),
            "description": "string (job responsibilities and achievements)",
            "skills": ["array of skills used in this role"]
        }
    ],
    "skills": {
        "technical": ["array of technical/hard skills"],
        "soft": ["array of soft skills"],
        "languages": ["array of programming languages or spoken languages"],
        "certifications": ["array of certifications"]
    },
    "projects": [
        {
            "title": "string",
            "description": "string",
            "technologies": ["array of technologies used"],
            "demoUrl": "string (if mentioned)",
            "githubUrl": "string (if mentioned)",
            "featured": boolean (true for notable projects),
            "status": "completed" or "in-progress" or "planned"
        }
    ],
    "achievements": [
        {
            "title": "string",
            "organization": "string (issuing organization)",
            "date": "string (YYYY or YYYY-MM)",
            "description": "string",
            "type": "award" or "certification" or "publication" or "other"
        }
    ],
    "contact": {
        "preferredContact": "email",
        "availability": "string (e.g., 'Available for hire', 'Open to opportunities')",
        "timezone": "string (if mentioned, otherwise 'UTC')",
        "hourlyRate": "string (if mentioned)",
        "responseTime": "24 hours"
    }
}

RULES:
1. Extract as much information as possible from the resume
2. If a field is not found, use empty string "" for strings, empty array [] for arrays
3. Be intelligent about categorizing skills (technical vs soft vs languages)
4. Parse dates in a consistent format
5. Identify certifications and add them to both skills.certifications and achievements
6. The description fields should be detailed and professional
7. Return ONLY the JSON object, nothing else

Resume Content:
{resume_text}"#;
