//! Static portfolio copy.

pub struct ProjectCard {
    pub title: &'static str,
    pub summary: &'static str,
}

pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

pub struct TimelineItem {
    pub period: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub struct SocialLink {
    pub class_name: &'static str,
    pub icon: &'static str,
    pub name: &'static str,
    pub href: &'static str,
    pub handle: &'static str,
    pub blurb: &'static str,
}

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "Hello! I'm Pratik Roy, a passionate Class 12 student preparing for JEE while pursuing my love for coding and technology.",
    "This portfolio is built to mimic the classic Windows 95 interface while showcasing my skills in HTML, CSS, and JavaScript.",
    "I specialize in creating interactive, visually appealing web applications with attention to detail and user experience.",
];

pub const ABOUT_FACTS: [(&str, &str); 3] = [
    ("Email", "roypratik1554@gmail.com"),
    ("Location", "India"),
    ("Status", "Student & Developer"),
];

pub const PROJECTS: [ProjectCard; 6] = [
    ProjectCard {
        title: "Windows 95 Portfolio",
        summary: "A fully interactive Windows 95 themed portfolio built with vanilla JavaScript.",
    },
    ProjectCard {
        title: "JEE Preparation Assistant",
        summary: "Web app with physics, chemistry, and math problem solvers and practice tests.",
    },
    ProjectCard {
        title: "Interactive Snake Game",
        summary: "Classic snake game with touch controls and progressive difficulty levels.",
    },
    ProjectCard {
        title: "Science Calculator Suite",
        summary: "Collection of scientific calculators for physics and chemistry problems.",
    },
    ProjectCard {
        title: "Task Manager App",
        summary: "Productivity app with Pomodoro timer and task organization features.",
    },
    ProjectCard {
        title: "Responsive Weather App",
        summary: "Weather application with location detection and 5-day forecasts.",
    },
];

pub const SKILLS: [Skill; 6] = [
    Skill { name: "HTML/CSS", percent: 95 },
    Skill { name: "JavaScript", percent: 90 },
    Skill { name: "UI/UX Design", percent: 85 },
    Skill { name: "Responsive Design", percent: 88 },
    Skill { name: "Problem Solving", percent: 92 },
    Skill { name: "Git & Version Control", percent: 85 },
];

pub const EDUCATION: [TimelineItem; 4] = [
    TimelineItem {
        period: "2023-2024",
        title: "Class 12 - Science Stream (PCM)",
        detail: "Currently in Class 12 with Physics, Chemistry, and Mathematics as main subjects. Maintaining excellent academic record while balancing coding projects.",
    },
    TimelineItem {
        period: "2022-Present",
        title: "JEE (Joint Entrance Examination) Preparation",
        detail: "Preparing for one of India's most competitive engineering entrance exams. Developing strong problem-solving skills that complement my programming abilities.",
    },
    TimelineItem {
        period: "2020-Present",
        title: "Self-Taught Programmer",
        detail: "Learned web development through online resources, building projects, and consistent practice. Developed expertise in frontend technologies and UI/UX design.",
    },
    TimelineItem {
        period: "Future Goals",
        title: "Computer Science Engineering",
        detail: "Aiming to pursue Computer Science Engineering to further enhance my technical skills and work on innovative projects in software development.",
    },
];

pub const EDUCATION_NOTE: &str = "I believe in the synergy between academic learning and practical coding skills. My JEE preparation has enhanced my logical thinking, which directly benefits my programming projects.";

pub const SOCIAL_LINKS: [SocialLink; 2] = [
    SocialLink {
        class_name: "social-link github",
        icon: "fab fa-github",
        name: "GitHub",
        href: "https://github.com/rox991",
        handle: "github.com/rox991",
        blurb: "Check out my coding projects and contributions",
    },
    SocialLink {
        class_name: "social-link instagram",
        icon: "fab fa-instagram",
        name: "Instagram",
        href: "https://instagram.com/_prat_7r",
        handle: "@_prat_7r",
        blurb: "Follow for updates and behind-the-scenes",
    },
];

pub const RESUME_SECTIONS: [&str; 5] = [
    "Academic Achievements",
    "Technical Skills & Projects",
    "Education Details",
    "Certifications",
    "Contact Information",
];

pub const RESUME_DOWNLOADED: &str =
    "Resume downloaded successfully! (This is a demo - in a real app, this would download a PDF)";
