use crate::pkg::internal::adaptors::jobs::spec::JobEntry;

fn list(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

#[allow(clippy::too_many_arguments)]
fn posting(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary: &str,
    posted: (&str, &str),
    description: &str,
    requirements: &[&str],
    benefits: &[&str],
    responsibilities: &[&str],
    experience: &str,
    counters: (u32, u32),
) -> JobEntry {
    JobEntry {
        id: id.into(),
        title: title.into(),
        company: company.into(),
        location: location.into(),
        salary: salary.into(),
        job_type: "Full-time".into(),
        posted_at: posted.0.into(),
        posted_date: Some(posted.1.into()),
        description: description.into(),
        requirements: list(requirements),
        benefits: list(benefits),
        responsibilities: list(responsibilities),
        experience: Some(experience.into()),
        applicants: Some(counters.0),
        views: Some(counters.1),
        status: Some("Active".into()),
    }
}

/// Postings the board starts with when `SEED_JOBS` is on.
pub fn mock_jobs() -> Vec<JobEntry> {
    vec![
        posting(
            "1",
            "Senior Frontend Developer",
            "Tech Innovations Inc.",
            "San Francisco, CA",
            "$120k - $160k",
            ("2 days ago", "Jan 16, 2026"),
            "We are seeking an experienced Senior Frontend Developer to join our dynamic team. You will be responsible for building and maintaining our web applications using modern technologies.",
            &["5+ years React experience", "TypeScript proficiency", "Strong CSS skills", "Experience with state management", "RESTful APIs knowledge"],
            &["Health Insurance", "401k Match", "Remote Work", "Flexible Hours", "Professional Development Budget"],
            &[
                "Develop and maintain responsive web applications using React and TypeScript",
                "Collaborate with designers and backend developers to implement new features",
                "Write clean, maintainable, and well-documented code",
                "Participate in code reviews and mentor junior developers",
                "Optimize applications for maximum speed and scalability",
            ],
            "5+ years",
            (24, 156),
        ),
        posting(
            "2",
            "Product Manager",
            "Digital Solutions Corp",
            "New York, NY",
            "$130k - $180k",
            ("3 days ago", "Jan 15, 2026"),
            "Seeking a strategic product manager to lead our product roadmap and work with cross-functional teams to deliver exceptional products.",
            &["3+ years PM experience", "Agile/Scrum knowledge", "Technical background", "Data-driven decision making"],
            &["Health Insurance", "Stock Options", "Unlimited PTO", "Learning Budget"],
            &[
                "Define product vision and strategy",
                "Work with engineering teams to deliver features",
                "Conduct user research and gather feedback",
                "Manage product roadmap and backlog",
                "Analyze metrics and make data-driven decisions",
            ],
            "3-5 years",
            (18, 203),
        ),
        posting(
            "3",
            "UX/UI Designer",
            "Creative Studio",
            "Austin, TX",
            "$90k - $120k",
            ("1 week ago", "Jan 11, 2026"),
            "Join our creative team to design beautiful user experiences for cutting-edge applications.",
            &["Figma expertise", "Portfolio required", "User research experience", "Design systems knowledge"],
            &["Health Insurance", "Creative Budget", "Hybrid Work", "Conference Attendance"],
            &[
                "Design intuitive user interfaces for web and mobile",
                "Conduct user research and usability testing",
                "Create and maintain design systems",
                "Collaborate with developers and product managers",
                "Present designs to stakeholders",
            ],
            "2-4 years",
            (31, 178),
        ),
        posting(
            "4",
            "Data Scientist",
            "Analytics Pro",
            "Boston, MA",
            "$140k - $190k",
            ("4 days ago", "Jan 14, 2026"),
            "Build machine learning models to drive business insights and decision making.",
            &["Python/R proficiency", "ML/AI experience", "Statistics background", "SQL expertise"],
            &["Health Insurance", "401k", "Learning Budget", "Remote OK", "Gym Membership"],
            &[
                "Develop predictive models and algorithms",
                "Analyze large datasets to extract insights",
                "Collaborate with business teams on data strategy",
                "Create data visualizations and reports",
                "Deploy models to production",
            ],
            "4+ years",
            (15, 189),
        ),
        posting(
            "5",
            "DevOps Engineer",
            "Cloud Systems Ltd",
            "Seattle, WA",
            "$125k - $165k",
            ("5 days ago", "Jan 13, 2026"),
            "Manage our cloud infrastructure and deployment pipelines using modern DevOps practices.",
            &["AWS/Azure experience", "Docker/Kubernetes", "CI/CD expertise", "Infrastructure as Code"],
            &["Health Insurance", "Stock Options", "Remote Work", "On-call Bonus"],
            &[
                "Maintain and improve cloud infrastructure",
                "Implement CI/CD pipelines",
                "Monitor system performance and reliability",
                "Automate deployment processes",
                "Ensure security and compliance",
            ],
            "3-5 years",
            (19, 142),
        ),
        posting(
            "6",
            "Marketing Manager",
            "Brand Builders",
            "Los Angeles, CA",
            "$100k - $140k",
            ("1 week ago", "Jan 11, 2026"),
            "Lead our marketing strategy and grow our brand presence across multiple channels.",
            &["5+ years marketing experience", "Digital marketing expertise", "Team leadership", "Analytics skills"],
            &["Health Insurance", "Bonus Structure", "Flexible Schedule", "Marketing Budget"],
            &[
                "Develop and execute marketing strategies",
                "Manage social media and content marketing",
                "Lead marketing team and campaigns",
                "Analyze campaign performance",
                "Build partnerships and collaborations",
            ],
            "5+ years",
            (22, 165),
        ),
        posting(
            "7",
            "Full Stack Developer",
            "Startup Ventures",
            "Remote",
            "$110k - $150k",
            ("1 day ago", "Jan 17, 2026"),
            "Join an early-stage startup to build innovative web applications from the ground up.",
            &["Node.js & React", "Database design", "API development", "MongoDB/PostgreSQL"],
            &["Equity", "Health Insurance", "100% Remote", "Flexible Hours", "Startup Culture"],
            &[
                "Build full-stack web applications",
                "Design and implement APIs",
                "Work on database architecture",
                "Collaborate with founders on product direction",
                "Ship features quickly",
            ],
            "2-4 years",
            (28, 201),
        ),
        posting(
            "8",
            "Sales Director",
            "Enterprise Solutions",
            "Chicago, IL",
            "$150k - $200k",
            ("3 days ago", "Jan 15, 2026"),
            "Drive sales strategy and lead a high-performing team to exceed revenue targets.",
            &["10+ years sales experience", "B2B SaaS background", "Leadership skills", "Enterprise sales"],
            &["Commission", "Health Insurance", "Car Allowance", "Stock Options", "Expense Account"],
            &[
                "Lead sales team and set targets",
                "Develop sales strategies and processes",
                "Build relationships with enterprise clients",
                "Manage sales pipeline and forecasting",
                "Collaborate with marketing on lead generation",
            ],
            "10+ years",
            (12, 98),
        ),
    ]
}
