use serde::{ Serialize, Deserialize };
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub personal: Personal,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub availability: Vec<String>,
    #[serde(default)]
    pub venture: Option<Venture>,
    #[serde(default)]
    pub specialty: Option<Specialty>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub location: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Expert => "Expert",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: Proficiency,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub organization: String,
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub program: String,
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    pub title: String,
    pub phone: String,
}

/// The product or startup the owner is currently building.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venture {
    pub name: String,
    pub role: String,
    pub summary: String,
    #[serde(default)]
    pub triggers: Vec<String>,
}

/// A technology domain the owner wants to be asked about directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Specialty {
    pub topic: String,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub related_projects: Vec<String>,
}

impl Profile {
    pub fn first_name(&self) -> &str {
        self.personal.name.split_whitespace().next().unwrap_or(&self.personal.name)
    }

    /// Skills grouped by category, categories in order of first appearance.
    pub fn skills_by_category(&self) -> Vec<(&str, Vec<&Skill>)> {
        let mut groups: Vec<(&str, Vec<&Skill>)> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|(category, _)| *category == skill.category) {
                Some((_, members)) => members.push(skill),
                None => groups.push((skill.category.as_str(), vec![skill])),
            }
        }
        groups
    }

    pub fn builtin() -> Self {
        Self {
            personal: Personal {
                name: "Alex Njoya".into(),
                title: "AI & Machine Learning Engineer".into(),
                tagline: "Building intelligent solutions with cutting-edge AI technologies.".into(),
                bio: "Final-year Computer Science student at the University of Ghana with strong experience in software development, frontend engineering, and AI application development. Co-founder of FineTun-ai, a platform enabling businesses to fine-tune Large Language Models (LLMs) using their proprietary datasets. Passionate about leveraging AI technology to solve real-world problems and contribute meaningfully to innovative development teams.".into(),
                email: "njoyaalexander71@gmail.com".into(),
                location: "Remote".into(),
                phone: Some("+233 240 027 151".into()),
            },
            skills: vec![
                skill("JavaScript/TypeScript", Proficiency::Expert, LANGUAGES),
                skill("React.js", Proficiency::Expert, LANGUAGES),
                skill("Next.js", Proficiency::Advanced, LANGUAGES),
                skill("Python", Proficiency::Advanced, LANGUAGES),
                skill("Solidity", Proficiency::Advanced, LANGUAGES),
                skill("Tailwind CSS", Proficiency::Expert, LANGUAGES),
                skill("Smart Contracts", Proficiency::Advanced, "Blockchain"),
                skill("Large Language Models", Proficiency::Advanced, "AI & Machine Learning"),
                skill("AI/ML Development", Proficiency::Advanced, "AI & Machine Learning"),
                skill("Git & GitHub", Proficiency::Expert, TOOLS),
                skill("Agile (Scrum, Kanban)", Proficiency::Advanced, TOOLS),
                skill("Problem-Solving", Proficiency::Expert, PROBLEM_SOLVING),
                skill("Algorithm Design", Proficiency::Advanced, PROBLEM_SOLVING),
                skill("Data Structures", Proficiency::Advanced, PROBLEM_SOLVING),
                skill("Code Optimization", Proficiency::Advanced, PROBLEM_SOLVING),
                skill("Testing & Debugging", Proficiency::Advanced, TOOLS)
            ],
            experience: vec![
                Experience {
                    role: "Co-Founder".into(),
                    organization: "FineTun-ai".into(),
                    period: "Apr 2025 – Present".into(),
                    achievements: strings(
                        &[
                            "Co-founded and led the development of a no-code platform enabling businesses to fine-tune Large Language Models (LLMs) using their proprietary datasets",
                            "Spearheaded product vision and strategy in a fast-paced startup environment",
                            "Focused on simplifying AI customization workflows for non-technical teams and startups",
                        ]
                    ),
                },
                Experience {
                    role: "Frontend Developer".into(),
                    organization: "Next Code Systems / Intent".into(),
                    period: "Jan 2024 – Mar 2024".into(),
                    achievements: strings(
                        &[
                            "Built responsive, user-friendly web interfaces using React.js and Tailwind CSS",
                            "Worked collaboratively in an agile team to meet product deadlines",
                        ]
                    ),
                },
                Experience {
                    role: "Volunteer Frontend Developer".into(),
                    organization: "Mowblox".into(),
                    period: "Mar 2024 – Jun 2024".into(),
                    achievements: strings(
                        &[
                            "Developed clean, functional web pages using modern JavaScript and UI libraries",
                            "Participated in UI/UX design improvements and user testing feedback loops",
                        ]
                    ),
                },
                Experience {
                    role: "Blockchain Developer".into(),
                    organization: "MEST Africa".into(),
                    period: "Aug 2023 – Oct 2023".into(),
                    achievements: strings(
                        &[
                            "Wrote, tested, and deployed Ethereum-compatible smart contracts using Solidity",
                            "Utilized Remix and Hardhat for smart contract development and simulation",
                            "Contributed to blockchain-based app prototypes as part of team projects",
                        ]
                    ),
                }
            ],
            education: vec![
                Education {
                    institution: "University of Ghana, Legon".into(),
                    program: "BSc. Mathematical Science (Computer Science)".into(),
                    period: "2022 – 2025".into(),
                    achievements: Vec::new(),
                },
                Education {
                    institution: "MEST Africa, Accra".into(),
                    program: "Web3 Bootcamp".into(),
                    period: "Jul 2023 – Sep 2023".into(),
                    achievements: strings(
                        &[
                            "Built decentralized applications (DApps) using Solidity and Ethereum toolkits",
                            "Gained hands-on experience with smart contract lifecycle and security best practices",
                        ]
                    ),
                },
                Education {
                    institution: "Udemy".into(),
                    program: "Online Courses".into(),
                    period: "Jul 2023 – Sep 2023".into(),
                    achievements: strings(
                        &[
                            "JavaScript: Basic to Advanced – EdYoda Digital University by Qaifi Khan",
                            "React: Beginner to Advanced – EdYoda Digital University by Qaifi Khan",
                            "Advanced JavaScript Concepts",
                        ]
                    ),
                }
            ],
            projects: vec![
                Project {
                    name: "FineTun-ai Platform".into(),
                    category: "Startup".into(),
                    description: "No-code platform enabling businesses to fine-tune Large Language Models (LLMs) using their proprietary datasets.".into(),
                    tech: strings(&["React.js", "Python", "LLMs", "AI/ML", "No-code Platform"]),
                    link: Some("https://github.com/alexnjoya/finetun-ai".into()),
                },
                Project {
                    name: "Crop Disease Prediction Platform".into(),
                    category: "AI Application".into(),
                    description: "AI-powered platform for predicting crop diseases using machine learning and computer vision.".into(),
                    tech: strings(&["React.js", "Python", "Machine Learning", "Computer Vision", "Vercel"]),
                    link: Some("https://github.com/alexnjoya/crop-disease-prediction".into()),
                },
                Project {
                    name: "Remifi - Cross-Platform Remittance".into(),
                    category: "Blockchain".into(),
                    description: "Cross-platform remittance solution for stable coins, enabling secure and fast international money transfers.".into(),
                    tech: strings(&["React.js", "Blockchain", "Stable Coins", "Web3", "Vercel"]),
                    link: Some("https://github.com/alexnjoya/remifi-remittance".into()),
                },
                Project {
                    name: "Tally - Blockchain Voting DApp".into(),
                    category: "Final Year Project".into(),
                    description: "A transparent and decentralized voting system using smart contracts.".into(),
                    tech: strings(&["Solidity", "React.js", "Ethereum", "Smart Contracts", "Web3"]),
                    link: Some("https://github.com/alexnjoya/tally-voting-dapp".into()),
                },
                Project {
                    name: "AdwumaPa - Blockchain Freelance Platform".into(),
                    category: "Stellar Project".into(),
                    description: "A Web3 platform helping remote workers get paid securely through crypto, tackling cross-border payment issues with smart contracts.".into(),
                    tech: strings(&["Solidity", "React.js", "Ethereum", "Crypto Payments", "Web3"]),
                    link: Some("https://github.com/alexnjoya/adwumapa-platform".into()),
                },
                Project {
                    name: "AI-Powered Voice Assistant".into(),
                    category: "AI Application".into(),
                    description: "Voice recognition and natural language processing system with real-time speech-to-text and response generation.".into(),
                    tech: strings(&["Python", "React.js", "Speech Recognition", "NLP", "AI/ML"]),
                    link: Some("https://github.com/alexnjoya/ai-voice-assistant".into()),
                }
            ],
            social: vec![
                SocialLink { label: "GitHub".into(), url: "https://github.com/alexnjoya".into() },
                SocialLink {
                    label: "LinkedIn".into(),
                    url: "https://linkedin.com/in/alexnjoya".into(),
                },
                SocialLink { label: "Phone".into(), url: "tel:+233240027151".into() }
            ],
            references: vec![
                Reference {
                    name: "Dr. Aziz Dwumfour".into(),
                    title: "Lecturer, University of Ghana".into(),
                    phone: "+233 26 054 1219".into(),
                },
                Reference {
                    name: "Mr. Rahaman".into(),
                    title: "Founder & CEO, BusyAntsde".into(),
                    phone: "+233 24 462 2440".into(),
                },
                Reference {
                    name: "Mr. Divine Njoya".into(),
                    title: "Teacher, Oti Senior High School".into(),
                    phone: "+233 46 973 690".into(),
                }
            ],
            availability: strings(
                &[
                    "Remote software development projects",
                    "Blockchain and smart contract development",
                    "Frontend engineering roles",
                    "AI/ML development opportunities",
                ]
            ),
            venture: Some(Venture {
                name: "FineTun-ai".into(),
                role: "Co-Founder".into(),
                summary: "a startup focused on enabling businesses to fine-tune Large Language Models (LLMs) using their proprietary datasets. The platform simplifies AI customization workflows for non-technical teams and startups.".into(),
                triggers: strings(&["finetun", "finetun-ai", "ai", "llm", "startup"]),
            }),
            specialty: Some(Specialty {
                topic: "blockchain".into(),
                triggers: strings(&["blockchain", "smart contract", "solidity", "ethereum", "web3"]),
                highlights: strings(
                    &[
                        "Smart contract development with Solidity",
                        "Ethereum development using Remix and Hardhat",
                        "Building DApps and DeFi applications",
                        "Web3 bootcamp training at MEST Africa",
                    ]
                ),
                related_projects: strings(&["Tally (voting DApp)", "AdwumaPa (blockchain freelance platform)"]),
            }),
        }
    }
}

const LANGUAGES: &str = "Languages & Frameworks";
const TOOLS: &str = "Tools & Practices";
const PROBLEM_SOLVING: &str = "Problem-Solving";

fn skill(name: &str, level: Proficiency, category: &str) -> Skill {
    Skill { name: name.into(), level, category: category.into() }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
