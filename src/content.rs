//! Portfolio content
//!
//! The built-in records are compiled into the binary. A JSON file with the
//! same shape can replace them at startup (`--content <FILE>`).

use crate::types::{
    Achievement, ContactInfo, Education, Experience, Principle, Project, SkillCategory,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Read-only content for one session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentStore {
    pub owner: String,
    pub headline: String,
    pub tagline: String,
    pub summary: String,
    pub background: String,
    pub cv_url: String,
    pub contact: ContactInfo,
    pub experiences: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub principles: Vec<Principle>,
}

impl ContentStore {
    /// Load content from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content from {:?}", path))?;
        Self::from_json(&raw).with_context(|| format!("Failed to parse content from {:?}", path))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let store: ContentStore = serde_json::from_str(raw).context("Invalid content JSON")?;
        Ok(store)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize content")
    }

    /// Wordmark for the header: last name, upper-cased, with a trailing dot
    pub fn brand(&self) -> String {
        let name = self.owner.split_whitespace().last().unwrap_or(&self.owner);
        format!("{}.", name.to_uppercase())
    }

    /// Skill categories shown on the home view: first 4, 3 skills each
    pub fn featured_skills(&self) -> Vec<(&str, &[String])> {
        self.skills
            .iter()
            .take(4)
            .map(|cat| {
                let n = cat.skills.len().min(3);
                (cat.category.as_str(), &cat.skills[..n])
            })
            .collect()
    }

    pub fn featured_projects(&self) -> &[Project] {
        &self.projects[..self.projects.len().min(2)]
    }

    /// Every skill in display order, flattened across categories
    pub fn all_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .flat_map(|cat| cat.skills.iter().map(String::as_str))
            .collect()
    }

    /// Selectable links on the contact view
    pub fn contact_links(&self) -> Vec<ContactLink> {
        let contact = &self.contact;
        let mut links = vec![
            ContactLink {
                label: "Reach Me at",
                display: contact.email.clone(),
                url: format!("mailto:{}", contact.email),
            },
            ContactLink {
                label: "GitHub",
                display: profile_handle(&contact.github, "/"),
                url: contact.github.clone(),
            },
            ContactLink {
                label: "LinkedIn",
                display: profile_handle(&contact.linkedin, "/in/"),
                url: with_scheme(&contact.linkedin),
            },
        ];
        if let Some(instagram) = &contact.instagram {
            links.push(ContactLink {
                label: "Social Media",
                display: profile_handle(instagram, "/"),
                url: instagram.clone(),
            });
        }
        if let Some(medium) = &contact.medium {
            links.push(ContactLink {
                label: "Articles",
                display: profile_handle(medium, ""),
                url: medium.clone(),
            });
        }
        links
    }

    /// Certifications that carry a credential link, as (name, url)
    pub fn certification_links(&self) -> Vec<(&str, &str)> {
        self.achievements
            .iter()
            .filter_map(|a| a.link.as_deref().map(|link| (a.name.as_str(), link)))
            .collect()
    }

    /// Links shown in the footer and the menu overlay, in order
    pub fn footer_links(&self) -> Vec<(&'static str, String)> {
        let contact = &self.contact;
        let mut links = vec![
            ("GitHub", contact.github.clone()),
            ("LinkedIn", with_scheme(&contact.linkedin)),
            ("Email", format!("mailto:{}", contact.email)),
        ];
        if let Some(instagram) = &contact.instagram {
            links.push(("Instagram", instagram.clone()));
        }
        if let Some(medium) = &contact.medium {
            links.push(("Medium", medium.clone()));
        }
        links
    }

    /// The content shipped with the binary
    pub fn builtin() -> Self {
        Self {
            owner: "E. Vanakeethan".into(),
            headline: "DEVOPS ENGINEER.".into(),
            tagline: "Architecting high-availability infrastructure and automated GitOps lifecycles for the modern web.".into(),
            summary: "Performance-driven DevOps Engineer with expertise in architecting high-availability infrastructure and automating complex deployment lifecycles. Specialized in cloud-native ecosystems (AWS/Azure), container orchestration (Kubernetes), and CI/CD optimization, with a strong focus on system reliability, security, and operational efficiency.".into(),
            background: "B.Sc (Hons) IT".into(),
            cv_url: "https://drive.google.com/file/d/13E_UtI3ce6Li-MTY3u29Tz8mQGyGQEpQ/view?usp=sharing".into(),
            contact: ContactInfo {
                phone: "+94 77 355 6800".into(),
                email: "vanakeethan@outlook.com".into(),
                location: "Colombo, Sri Lanka".into(),
                linkedin: "linkedin.com/in/vanakeethan".into(),
                website: "vanakeethan.netlify.app".into(),
                github: "https://github.com/vanakeethan".into(),
                instagram: Some("https://www.instagram.com/vanakeethan__/".into()),
                medium: Some("https://medium.com/@shamdeepvk".into()),
            },
            experiences: vec![
                Experience {
                    company: "Aventage Labs (Pvt) Ltd".into(),
                    role: "DevOps Engineer".into(),
                    period: "September 2024 – Present".into(),
                    location: Some("Colombo, Sri Lanka".into()),
                    description: None,
                    technologies: None,
                    responsibilities: strings(&[
                        "Engineered high-performance CI/CD pipelines using Jenkins and AWS, reducing deployment cycles through automated Docker containerization and Compose orchestration.",
                        "Architected and managed production-grade Kubernetes (EKS) clusters with Bitbucket-integrated GitOps workflows for seamless service rollouts.",
                        "Implemented enterprise-level monitoring and observability stacks using Prometheus and Grafana, resulting in a 30% improvement in incident detection and system transparency.",
                        "Hardened infrastructure security by implementing automated SSL/TLS certificate management and identity-access policies for cloud services.",
                    ]),
                },
                Experience {
                    company: "Huex (Pvt) Ltd".into(),
                    role: "DevOps Engineer Intern".into(),
                    period: "July 2023 – December 2023".into(),
                    location: Some("Colombo, Sri Lanka".into()),
                    description: None,
                    technologies: None,
                    responsibilities: strings(&[
                        "Facilitated the migration of monolithic services to microservices using Docker and Kubernetes, enhancing application scalability and fault tolerance.",
                        "Optimized source code management workflows across GitHub and GitLab, streamlining collaborative development for multiple Agile scrum teams.",
                        "Reduced CI build failures by 40% through rigorous troubleshooting and script optimization in Jenkins-based environments.",
                        "Leveraged AWS services for cost-effective cloud resource allocation and automated infrastructure provisioning.",
                    ]),
                },
            ],
            skills: vec![
                category("Languages", &["Java", "Python", "C", "HTML/CSS", "JavaScript", "Bash"]),
                category(
                    "DevOps Tools",
                    &["Docker", "Jenkins", "Kubernetes", "Ansible", "Terraform", "Prometheus", "Grafana", "Git"],
                ),
                category(
                    "Technologies/Frameworks",
                    &["Spring Boot", "React.js", "Tailwind", "Bootstrap", "Material-UI"],
                ),
                category("Cloud Platform", &["AWS", "Azure", "Google Cloud"]),
                category("Database", &["MySQL", "MongoDB", "PostgreSQL"]),
                category("Operating System", &["Windows", "MacOS", "Linux"]),
                category(
                    "Developer Tools",
                    &["GitHub", "VS Code", "PyCharm", "Kaggle", "Google Colab", "IntelliJ IDEA", "Postman"],
                ),
            ],
            projects: vec![
                Project {
                    title: "AI-Driven Financial Market Analysis".into(),
                    year: "2023".into(),
                    category: "Research & Development".into(),
                    description: "Developed a predictive analysis engine using Bi-LSTM models and NLP to evaluate the correlation between social media sentiment and cryptocurrency volatility during geopolitical conflicts.".into(),
                    technologies: strings(&["Python", "Bi-LSTM", "TensorFlow", "NLP", "Data Engineering"]),
                },
                Project {
                    title: "Enterprise Reimbursement Platform".into(),
                    year: "2022".into(),
                    category: "Full Stack Systems".into(),
                    description: "Designed a secure financial reimbursement system with a Spring Boot backend and React frontend, focusing on transactional integrity and role-based access control (RBAC).".into(),
                    technologies: strings(&["Spring Boot", "React.js", "MySQL", "Docker", "REST API"]),
                },
                Project {
                    title: "Industrial Boiler Monitoring System".into(),
                    year: "2021".into(),
                    category: "Embedded Systems".into(),
                    description: "Engineered an automated hardware-software solution for real-time industrial boiler condition monitoring, extending equipment lifespan through precise sensor-driven environmental control.".into(),
                    technologies: strings(&["C", "ATmega32", "Firmware Engineering", "Hardware Integration"]),
                },
                Project {
                    title: "Scalable Microservices Media Hub".into(),
                    year: "2022".into(),
                    category: "Architecture Project".into(),
                    description: "Implemented a decoupled media review architecture utilizing MongoDB and Spring Boot, designed for horizontal scaling and high-concurrency user interactions.".into(),
                    technologies: strings(&["MongoDB", "Spring Boot", "React", "Microservices"]),
                },
            ],
            education: vec![
                Education {
                    institution: "University of Moratuwa".into(),
                    degree: "B.Sc. (Hons) in Information Technology".into(),
                    period: "Nov 2018 – July 2023".into(),
                    details: strings(&[
                        "Focused on Software Engineering and Enterprise Architectures",
                        "Cumulative GPA: 3.04",
                    ]),
                },
                Education {
                    institution: "Jaffna Hindu College".into(),
                    degree: "Advanced Level (Physical Science)".into(),
                    period: "2017".into(),
                    details: strings(&[
                        "Achieved 2 A's and 1 B in core science subjects",
                        "Distinction in Mathematics and Chemistry",
                    ]),
                },
            ],
            achievements: vec![
                Achievement {
                    name: "Microsoft Certified: Azure Fundamentals (AZ-900)".into(),
                    link: Some("https://www.credly.com/badges/fc4a93d7-e75c-457c-b012-40a51845d950/public_url".into()),
                },
                Achievement {
                    name: "AWS Cloud Practitioner (Certified)".into(),
                    link: None,
                },
                Achievement {
                    name: "Cisco: Introduction to Cybersecurity & Networking".into(),
                    link: Some("https://www.credly.com/badges/8e0cc245-24d2-4140-b694-f24c239de1d8/public_url".into()),
                },
            ],
            principles: vec![
                Principle {
                    title: "Engineering Philosophy".into(),
                    body: "Infrastructure should be silent, immutable, and version-controlled through high-fidelity code.".into(),
                },
                Principle {
                    title: "Deployment Strategy".into(),
                    body: "Obsessive focus on engineering velocity without sacrificing system integrity or security.".into(),
                },
            ],
        }
    }
}

/// A selectable entry on the contact view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub display: String,
    pub url: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(name: &str, skills: &[&str]) -> SkillCategory {
    SkillCategory {
        category: name.into(),
        skills: strings(skills),
    }
}

/// Last path segment of a profile URL, e.g. "/vanakeethan"
fn profile_handle(url: &str, prefix: &str) -> String {
    let segment = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url);
    format!("{}{}", prefix, segment)
}

fn with_scheme(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
