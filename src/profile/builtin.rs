//! The compiled-in profile.

use std::sync::LazyLock;

use indexmap::IndexMap;

use super::{Contact, Education, Job, Profile};

static BUILTIN: LazyLock<Profile> = LazyLock::new(build);

/// The profile shipped with the binary. Built on first access, then shared
/// read-only for the life of the process.
#[must_use]
pub fn builtin() -> &'static Profile {
    &BUILTIN
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn build() -> Profile {
    let socials: IndexMap<String, String> = [
        ("linkedin", "https://www.linkedin.com/in/rksinghkan"),
        ("github", "https://github.com/rohhhitt"),
        ("leetcode", "https://leetcode.com/u/rohhhitt/"),
    ]
    .into_iter()
    .map(|(channel, url)| (channel.to_string(), url.to_string()))
    .collect();

    let skills: IndexMap<String, Vec<String>> = [
        ("Languages", strings(&["Java", "Go", "Python", "SQL", "JavaScript"])),
        ("Backend", strings(&["Spring Boot", "REST APIs", "gRPC", "Microservices", "Kafka"])),
        ("Data & Storage", strings(&["PostgreSQL", "MySQL", "Redis", "Elasticsearch"])),
        ("Cloud & DevOps", strings(&["AWS", "Docker", "Kubernetes", "Jenkins", "Terraform"])),
        ("Practices", strings(&["System Design", "TDD", "Code Review", "Observability"])),
    ]
    .into_iter()
    .map(|(category, items)| (category.to_string(), items))
    .collect();

    Profile {
        name: "Rohit Kumar Singh".to_string(),
        title: "Software Engineer · Backend & Distributed Systems".to_string(),
        location: "Kanpur, India".to_string(),
        summary: "Backend engineer who builds and runs high-throughput services. \
                  Comfortable across the stack from schema design to on-call, with a \
                  bias for simple designs, measurable performance and clear ownership."
            .to_string(),
        contact: Contact {
            phone: "+91 98765 43210".to_string(),
            email: "rohit.singh@example.com".to_string(),
        },
        socials,
        skills,
        experience: vec![
            Job {
                role: "Software Engineer II".to_string(),
                company: "Fintech Platform".to_string(),
                location: "Bengaluru".to_string(),
                period: "2022 - Present".to_string(),
                bullets: strings(&[
                    "Owned the payments ledger service at peak loads of 4k requests per second.",
                    "Cut p99 settlement latency by 38% by moving reconciliation onto Kafka.",
                    "Led the migration of three services from a monolith to Kubernetes.",
                ]),
            },
            Job {
                role: "Software Engineer".to_string(),
                company: "E-commerce Marketplace".to_string(),
                location: "Noida".to_string(),
                period: "2020 - 2022".to_string(),
                bullets: strings(&[
                    "Built the catalogue search API on Elasticsearch serving 20M products.",
                    "Introduced contract tests between order and inventory services.",
                ]),
            },
            Job {
                role: "Software Engineering Intern".to_string(),
                company: "Analytics Startup".to_string(),
                location: "Remote".to_string(),
                period: "2019".to_string(),
                bullets: strings(&[
                    "Wrote ETL jobs in Python feeding the internal reporting warehouse.",
                ]),
            },
        ],
        education: Education {
            degree: "B.Tech in Computer Science and Engineering".to_string(),
            school: "Harcourt Butler Technical University, Kanpur".to_string(),
            year: "2020".to_string(),
        },
        certifications: strings(&[
            "AWS Certified Solutions Architect – Associate",
            "Certified Kubernetes Application Developer (CKAD)",
            "Spot Award for on-call excellence, 2023",
        ]),
        achievements: strings(&[
            "Solved 600+ problems on LeetCode; contest rating in the top 5%.",
            "Speaker at a city Java user group on event-driven reconciliation.",
            "Mentored four interns through to full-time offers.",
        ]),
    }
}
