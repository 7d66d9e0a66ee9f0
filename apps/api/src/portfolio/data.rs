//! The portfolio content itself. This is the server-side counterpart of the
//! client's static data object: built once at startup and shared read-only
//! through `AppState`.

use crate::models::portfolio::{
    Achievement, ContactInfo, Education, Experience, Portfolio, Profile, Project, Skill,
    SkillCategory, SocialLink, Technology,
};

fn tech(name: &str) -> Technology {
    Technology {
        name: name.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(name: &str, percentage: u8) -> Skill {
    Skill {
        name: name.to_string(),
        percentage,
    }
}

pub fn default_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Daniyal Imran".to_string(),
            headline: "Web & Software Developer".to_string(),
            summary: "Computer Science graduate from FAST NUCES with experience in \
                      full-stack development, blockchain technologies, and AI. Passionate \
                      about creating innovative solutions that solve real-world problems."
                .to_string(),
            location: "Islamabad, Pakistan".to_string(),
        },
        education: vec![
            Education {
                degree: "BS Computer Science".to_string(),
                institution: "FAST NUCES Islamabad".to_string(),
                period: "Sep 2020 - May 2024".to_string(),
            },
            Education {
                degree: "ICS Computer Science".to_string(),
                institution: "Forman Christian College, Lahore".to_string(),
                period: "Sep 2018 - May 2020".to_string(),
            },
        ],
        interests: strings(&["Web 3.0", "Gaming", "Traveling", "Music", "Sports"]),
        experiences: vec![
            Experience {
                title: "MERN Stack Developer".to_string(),
                company: "CodesOrbit".to_string(),
                period: "Aug 2024 - Present".to_string(),
                responsibilities: strings(&[
                    "Developing full-stack web applications using MongoDB, Express.js, React, and Node.js",
                    "Implementing responsive designs and user-friendly interfaces",
                    "Collaborating with team members for seamless integration of frontend and backend services",
                    "Optimizing application performance and enhancing user experience",
                ]),
            },
            Experience {
                title: "Lab Demonstrator".to_string(),
                company: "FAST NUCES Islamabad".to_string(),
                period: "Jan 2023 - May 2023".to_string(),
                responsibilities: strings(&[
                    "Assisted students with networking concepts using Cisco Packet Tracer",
                    "Provided guidance on configuring network topologies and troubleshooting",
                    "Demonstrated effective communication of complex technical concepts",
                ]),
            },
            Experience {
                title: "Front End Developer".to_string(),
                company: "Freelance".to_string(),
                period: "2020".to_string(),
                responsibilities: strings(&[
                    "Designed and implemented frontend for a cargo delivery application using React",
                    "Integrated frontend with SQL-based backend using APIs",
                    "Collaborated with backend team for endpoint testing and implementation",
                    "Delivered project on time while meeting all client requirements",
                ]),
            },
        ],
        project_categories: strings(&["mern", "blockchain", "react", "other"]),
        projects: vec![
            Project {
                title: "Mindsight App".to_string(),
                description: "A comprehensive application to assist psychologists in detecting \
                              anxiety through facial analysis, speech sentiment analysis, and \
                              IoT device data."
                    .to_string(),
                category: "mern".to_string(),
                technologies: vec![tech("MERN"), tech("Flask"), tech("IoT"), tech("TensorFlow")],
                github: "https://github.com".to_string(),
                live_demo: "#".to_string(),
            },
            Project {
                title: "Cafe Management System".to_string(),
                description: "Built cafe management system with blockchain integration for \
                              transparent transactions and Solidity smart contracts."
                    .to_string(),
                category: "blockchain".to_string(),
                technologies: vec![tech("GO"), tech("React"), tech("Web3"), tech("Solidity")],
                github: "https://github.com".to_string(),
                live_demo: "#".to_string(),
            },
            Project {
                title: "Contact Manager App".to_string(),
                description: "Developed RESTful API backend for contact management with CRUD \
                              operations and MongoDB integration."
                    .to_string(),
                category: "mern".to_string(),
                technologies: vec![tech("Node.js"), tech("Express.js"), tech("MongoDB")],
                github: "https://github.com".to_string(),
                live_demo: "#".to_string(),
            },
            Project {
                title: "Group Chatting App".to_string(),
                description: "Developed WhatsApp-inspired clone with Firebase backend and \
                              real-time group chat functionality."
                    .to_string(),
                category: "react".to_string(),
                technologies: vec![tech("React"), tech("Firebase")],
                github: "https://github.com".to_string(),
                live_demo: "#".to_string(),
            },
            Project {
                title: "Google Clone".to_string(),
                description: "Created Google search engine clone using React with Google API \
                              integration for search result display."
                    .to_string(),
                category: "react".to_string(),
                technologies: vec![tech("React"), tech("REST API")],
                github: "https://github.com".to_string(),
                live_demo: "#".to_string(),
            },
            Project {
                title: "NASCON Event Website".to_string(),
                description: "Led development of event website for three-day NASCON event with \
                              ASP.NET backend and SQL database."
                    .to_string(),
                category: "other".to_string(),
                technologies: vec![
                    tech("HTML"),
                    tech("CSS"),
                    tech("JavaScript"),
                    tech("ASP.NET"),
                    tech("SQL"),
                ],
                github: "https://github.com".to_string(),
                live_demo: "#".to_string(),
            },
        ],
        skill_categories: vec![
            SkillCategory {
                title: "Languages".to_string(),
                skills: vec![
                    skill("JavaScript", 90),
                    skill("Python", 85),
                    skill("Java", 75),
                    skill("C/C++", 80),
                    skill("Solidity", 70),
                ],
                color: "bg-primary-600".to_string(),
            },
            SkillCategory {
                title: "Frameworks & Libraries".to_string(),
                skills: vec![
                    skill("React", 95),
                    skill("Node.js", 85),
                    skill("Express.js", 80),
                    skill("NextJS", 75),
                    skill("TailwindCSS", 90),
                ],
                color: "bg-emerald-500".to_string(),
            },
        ],
        tools: strings(&["Git/GitHub", "MongoDB", "MySQL", "AWS", "Linux", "Firebase"]),
        achievements: vec![
            Achievement {
                icon: "trophy".to_string(),
                title: "Hackathon CTF Achievement".to_string(),
                description: "Ranked 59th in Hackathon CTF event by Ignite (out of 500+ \
                              participants)"
                    .to_string(),
            },
            Achievement {
                icon: "cloud".to_string(),
                title: "AWS Academy Graduate".to_string(),
                description: "AWS Academy Microservices and CI/CD Pipeline Builder".to_string(),
            },
            Achievement {
                icon: "code".to_string(),
                title: "Web Development Internship".to_string(),
                description: "Web Development Internship Certificate".to_string(),
            },
        ],
        contact_info: ContactInfo {
            email: "daniyalimran602@gmail.com".to_string(),
            phone: "+92 3035053501".to_string(),
            location: "Islamabad, Pakistan".to_string(),
            social_links: vec![
                SocialLink {
                    name: "LinkedIn".to_string(),
                    url: "https://linkedin.com".to_string(),
                },
                SocialLink {
                    name: "GitHub".to_string(),
                    url: "https://github.com".to_string(),
                },
                SocialLink {
                    name: "Medium".to_string(),
                    url: "https://medium.com".to_string(),
                },
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_project_category_is_declared() {
        let portfolio = default_portfolio();
        for project in &portfolio.projects {
            assert!(
                portfolio.project_categories.contains(&project.category),
                "project '{}' has undeclared category '{}'",
                project.title,
                project.category
            );
        }
    }

    #[test]
    fn test_skill_percentages_are_within_range() {
        let portfolio = default_portfolio();
        for category in &portfolio.skill_categories {
            for skill in &category.skills {
                assert!(skill.percentage <= 100, "skill '{}' out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(default_portfolio()).unwrap();
        assert!(value.get("projectCategories").is_some());
        assert!(value.get("skillCategories").is_some());
        assert!(value["contactInfo"].get("socialLinks").is_some());
        assert!(value["projects"][0].get("liveDemo").is_some());
    }
}
