//! Static page copy and the skill categories derived from GitHub data.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::collections::BTreeMap;

use crate::net::github::top_languages;

pub const OWNER_NAME: &str = "Diae Eddine Jamal";
pub const OWNER_TITLE: &str = "Software Engineer";
pub const OWNER_EMAIL: &str = "diae_2002@hotmail.com";
pub const AVAILABILITY: &str = "Available for work";
pub const OWNER_INTRO: &str = "I'm a recently graduated software engineer with a passion for AI and full-stack \
    development. I specialize in building mobile and web applications using modern technologies, with expertise \
    in microservices architecture using Spring Boot and various cutting-edge frameworks.";
pub const CV_URL: &str = "/cv.pdf";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/diae-eddine-jamal-5066242a5/";

/// In-page navigation targets, `(selector, label)`.
pub static NAV_ITEMS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

/// Number of GitHub languages shown in the generated category.
pub const GITHUB_LANGUAGE_LIMIT: usize = 6;
const GITHUB_LANGUAGE_LEVEL: u8 = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Teal,
    Orange,
}

impl Accent {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Teal => "accent-teal",
            Self::Orange => "accent-orange",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent.
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub accent: Accent,
    pub skills: Vec<Skill>,
}

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub static HIGHLIGHTS: [Highlight; 4] = [
    Highlight { title: "Frontend Development", description: "Creating responsive and interactive user interfaces" },
    Highlight { title: "Backend Development", description: "Building scalable APIs and server-side applications" },
    Highlight { title: "Database Design", description: "Designing efficient database schemas and queries" },
    Highlight { title: "Full Stack Solutions", description: "End-to-end application development and deployment" },
];

pub struct FeaturedProject {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub code_url: &'static str,
    pub demo_url: Option<&'static str>,
    pub accent: Accent,
}

pub static FEATURED_PROJECTS: [FeaturedProject; 6] = [
    FeaturedProject {
        title: "WolziFlix - Streaming Platform",
        description: "A streaming platform for anime, TV series, and movies with authentication, \
                      browsing, search, and a responsive layout.",
        image: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=800",
        tech: &["React", "Next.js", "Streaming APIs", "Responsive Design", "Vercel"],
        code_url: "https://github.com/DiaeEddineJamal/wolzi-stream-hub",
        demo_url: Some("https://wolzi-stream-hub.vercel.app/"),
        accent: Accent::Teal,
    },
    FeaturedProject {
        title: "Task Flow - Task Manager",
        description: "A cross-platform task manager built with Flutter and Spring Boot, with priorities, \
                      filtering, and team collaboration.",
        image: "https://images.pexels.com/photos/3184418/pexels-photo-3184418.jpeg?auto=compress&cs=tinysrgb&w=800",
        tech: &["Flutter", "Dart", "Spring Boot", "SQL", "Java"],
        code_url: "https://github.com/DiaeEddineJamal/Task_Manager_Backend",
        demo_url: None,
        accent: Accent::Teal,
    },
    FeaturedProject {
        title: "Chatyemente Chat App",
        description: "A real-time desktop chat application written in Java with a JavaFX interface.",
        image: "https://images.pexels.com/photos/5082579/pexels-photo-5082579.jpeg?auto=compress&cs=tinysrgb&w=800",
        tech: &["Java", "JavaFX", "Socket Programming"],
        code_url: "https://github.com/DiaeEddineJamal/Chatyemente-",
        demo_url: None,
        accent: Accent::Blue,
    },
    FeaturedProject {
        title: "Lilas Kokoro",
        description: "A wellbeing companion app for Android and iOS with AI chat, reminders, and \
                      mindfulness tools.",
        image: "https://images.pexels.com/photos/4498318/pexels-photo-4498318.jpeg?auto=compress&cs=tinysrgb&w=800",
        tech: &["Flutter", "Dart", "AI Integration", "Mobile Development", "Cross-platform"],
        code_url: "https://github.com/DiaeEddineJamal/lilas_kokoro",
        demo_url: None,
        accent: Accent::Orange,
    },
    FeaturedProject {
        title: "Marsa Maroc LLaMA 3.1 Model",
        description: "A fine-tuned LLaMA 3.1 8B model, quantized to 4.9GB and published on Hugging Face \
                      and Ollama.",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=800",
        tech: &["Machine Learning", "LLaMA 3.1", "Model Fine-tuning", "NLP", "AI"],
        code_url: "https://huggingface.co/Luziv/Marsa-Maroc-modelx",
        demo_url: Some("https://ollama.com/Luzivx/luzivila-model"),
        accent: Accent::Orange,
    },
    FeaturedProject {
        title: "Lila GPT - AI Assistant",
        description: "A conversational assistant with context-aware responses, built with modern web \
                      technologies.",
        image: "https://images.pexels.com/photos/8386440/pexels-photo-8386440.jpeg?auto=compress&cs=tinysrgb&w=800",
        tech: &["AI/ML", "Natural Language Processing", "Web Development", "API Integration", "Vercel"],
        code_url: "https://github.com/DiaeEddineJamal/lila-gpt",
        demo_url: Some("https://lila-gpt.vercel.app/"),
        accent: Accent::Orange,
    },
];

pub struct ContactInfo {
    pub title: &'static str,
    pub info: &'static str,
    pub link: &'static str,
}

pub static CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo { title: "Email", info: OWNER_EMAIL, link: "mailto:diae_2002@hotmail.com" },
    ContactInfo { title: "Phone", info: "+1 (555) 123-4567", link: "tel:+15551234567" },
    ContactInfo { title: "Location", info: "Casablanca (Remote work worldwide)", link: "#contact" },
];

pub struct SocialLink {
    pub label: &'static str,
    pub url: String,
}

/// GitHub, LinkedIn, and email links shown in the header, contact section, and footer.
#[must_use]
pub fn social_links(github_profile_url: String) -> [SocialLink; 3] {
    [
        SocialLink { label: "GitHub", url: github_profile_url },
        SocialLink { label: "LinkedIn", url: LINKEDIN_URL.to_owned() },
        SocialLink { label: "Email", url: format!("mailto:{OWNER_EMAIL}") },
    ]
}

fn skills(entries: &[(&str, u8)]) -> Vec<Skill> {
    entries.iter().map(|(name, level)| Skill { name: (*name).to_owned(), level: *level }).collect()
}

/// The fixed categories plus one built from the owner's most used GitHub
/// languages, with a fallback while that data is unavailable.
#[must_use]
pub fn skill_categories(language_counts: &BTreeMap<String, usize>) -> Vec<SkillCategory> {
    let from_github: Vec<Skill> = top_languages(language_counts, GITHUB_LANGUAGE_LIMIT)
        .into_iter()
        .map(|(name, _)| Skill { name, level: GITHUB_LANGUAGE_LEVEL })
        .collect();
    let from_github = if from_github.is_empty() {
        skills(&[("TypeScript", 85), ("JavaScript", 85)])
    } else {
        from_github
    };

    vec![
        SkillCategory {
            title: "Frontend",
            accent: Accent::Blue,
            skills: skills(&[
                ("React", 95),
                ("TypeScript", 90),
                ("Next.js", 85),
                ("Tailwind CSS", 92),
                ("JavaScript", 95),
                ("HTML/CSS", 98),
            ]),
        },
        SkillCategory {
            title: "Backend",
            accent: Accent::Teal,
            skills: skills(&[
                ("Node.js", 88),
                ("Python", 85),
                ("Express.js", 90),
                ("REST APIs", 92),
                ("GraphQL", 75),
                ("Microservices", 80),
            ]),
        },
        SkillCategory {
            title: "Database & Tools",
            accent: Accent::Orange,
            skills: skills(&[
                ("PostgreSQL", 88),
                ("MongoDB", 85),
                ("Git", 95),
                ("Docker", 82),
                ("AWS", 78),
                ("Linux", 85),
            ]),
        },
        SkillCategory { title: "From My GitHub", accent: Accent::Blue, skills: from_github },
    ]
}
