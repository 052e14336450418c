//! Core data types for folio
//!
//! Tabs, theme modes and the portfolio records rendered by the views.

use serde::{Deserialize, Serialize};

/// A role held at a company
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technologies: Option<Vec<String>>,
    pub responsibilities: Vec<String>,
}

impl Experience {
    /// First responsibility, used as the teaser line on the home view
    pub fn headline(&self) -> &str {
        self.responsibilities
            .first()
            .map(String::as_str)
            .or(self.description.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub year: String,
    pub category: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub details: Vec<String>,
}

/// A short "how I work" statement on the about view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principle {
    pub title: String,
    pub body: String,
}

/// A certification; not every one has a public verification link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Achievement {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub github: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
}

/// Light/dark visual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Parse the stored representation ("light" / "dark")
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Application tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Home,
            Tab::About,
            Tab::Experience,
            Tab::Skills,
            Tab::Projects,
            Tab::Contact,
        ]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::About => 1,
            Tab::Experience => 2,
            Tab::Skills => 3,
            Tab::Projects => 4,
            Tab::Contact => 5,
        }
    }

    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Tab::Home,
            1 => Tab::About,
            2 => Tab::Experience,
            3 => Tab::Skills,
            4 => Tab::Projects,
            5 => Tab::Contact,
            _ => Tab::Home,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::About => "About",
            Tab::Experience => "Experience",
            Tab::Skills => "Technical Skills",
            Tab::Projects => "Projects",
            Tab::Contact => "Connect",
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::all().len())
    }

    pub fn prev(&self) -> Self {
        let len = Self::all().len();
        Self::from_index((self.index() + len - 1) % len)
    }
}
