//! Compile-time portfolio content: profile, hero badges, skills, testimonials.

use super::types::{Skill, SkillIcon, Testimonial};

pub const HANDLE: &str = "codiac";
pub const FULL_NAME: &str = "Musa Musa Kannike";
pub const ROLE: &str = "Fullstack Web & Mobile Developer";
pub const INTRO: &str = "Crafting digital experiences across web and mobile platforms with modern technologies. \
     Specializing in React, React Native, Next.js, Node.js, and MongoDB.";
pub const CONTACT_EMAIL: &str = "musamusakannike@gmail.com";
pub const FOOTER_EMAIL: &str = "codiac@example.com";
pub const GITHUB_PROFILE: &str = "https://github.com/codiac";
pub const PAGE_TITLE: &str = "codiac - Fullstack Developer Portfolio";
pub const PAGE_DESCRIPTION: &str = "Portfolio of Musa Musa Kannike (codiac) - Fullstack Web & Mobile Developer \
     specializing in React, React Native, Next.js, Node.js, and MongoDB.";

pub const HERO_TECH: &[&str] = &[
    "HTML",
    "CSS",
    "Tailwind CSS",
    "React",
    "React Native",
    "Next.js",
    "Node.js",
    "Express",
    "MongoDB",
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", level: 95, category: "Frontend", icon: SkillIcon::Code },
    Skill { name: "React Native", level: 90, category: "Mobile", icon: SkillIcon::Mobile },
    Skill { name: "Next.js", level: 92, category: "Frontend", icon: SkillIcon::Globe },
    Skill { name: "TypeScript", level: 88, category: "Frontend", icon: SkillIcon::Code },
    Skill { name: "Node.js", level: 90, category: "Backend", icon: SkillIcon::Server },
    Skill { name: "Express", level: 85, category: "Backend", icon: SkillIcon::Server },
    Skill { name: "MongoDB", level: 87, category: "Backend", icon: SkillIcon::Database },
    Skill { name: "Tailwind CSS", level: 93, category: "Frontend", icon: SkillIcon::Code },
    Skill { name: "JavaScript", level: 95, category: "Frontend", icon: SkillIcon::Code },
    Skill { name: "HTML/CSS", level: 96, category: "Frontend", icon: SkillIcon::Code },
    Skill { name: "Git", level: 89, category: "Tools", icon: SkillIcon::Code },
    Skill { name: "REST APIs", level: 91, category: "Backend", icon: SkillIcon::Server },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: "1",
        name: "Sarah Johnson",
        role: "Product Manager",
        company: "TechCorp Inc.",
        content: "Working with codiac was an absolute pleasure. His attention to detail and ability to translate \
             complex requirements into elegant solutions is remarkable. The mobile app he developed exceeded our \
             expectations.",
        rating: 5,
        avatar: "/placeholder.svg?height=60&width=60",
    },
    Testimonial {
        id: "2",
        name: "Michael Chen",
        role: "CTO",
        company: "StartupXYZ",
        content: "codiac delivered a full-stack solution that was both scalable and maintainable. His expertise in \
             React and Node.js helped us launch our product ahead of schedule. Highly recommended!",
        rating: 5,
        avatar: "/placeholder.svg?height=60&width=60",
    },
    Testimonial {
        id: "3",
        name: "Emily Rodriguez",
        role: "Design Lead",
        company: "Creative Agency",
        content: "The collaboration with codiac was seamless. He perfectly implemented our designs with \
             pixel-perfect precision and added thoughtful animations that enhanced the user experience.",
        rating: 5,
        avatar: "/placeholder.svg?height=60&width=60",
    },
    Testimonial {
        id: "4",
        name: "David Thompson",
        role: "Founder",
        company: "E-commerce Platform",
        content: "codiac's full-stack development skills are exceptional. He built our entire e-commerce platform \
             from scratch, handling everything from the React frontend to the Node.js backend with MongoDB.",
        rating: 5,
        avatar: "/placeholder.svg?height=60&width=60",
    },
];
