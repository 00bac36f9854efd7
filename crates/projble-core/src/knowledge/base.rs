//! Immutable company facts, populated at compile time.

/// Fixed company facts. Core values are an ordered slice so rendering is deterministic.
#[derive(Debug)]
pub struct KnowledgeBase {
    pub company_name: &'static str,
    pub mission: &'static str,
    pub vision: &'static str,
    /// (value name, description) in declared order.
    pub core_values: &'static [(&'static str, &'static str)],
    pub careers: &'static str,
}

pub static PROJ_BLE: KnowledgeBase = KnowledgeBase {
    company_name: "PROJ-BLE",
    mission: "To redefine K-12 education by integrating blended learning models that provide students with adaptive, engaging, & personalized learning experiences. We leverage technology, foster critical thinking, and ensure equal access to quality education for all students.",
    vision: "We envision a future where every student experiences personalised, high-quality learning. While resources may come from various providers, teachers remain essential as facilitators and coordinators. By combining technology, expert instruction, and diverse learning solutions through an advanced LMS, we empower educators to focus on mentoring and fostering critical thinking, ensuring every child thrives.",
    core_values: &[
        ("Innovation", "We embrace technology to enhance learning outcomes."),
        ("Equity", "Quality education should be accessible to all students."),
        ("Collaboration", "A thriving educational environment is built on teamwork."),
        ("Lifelong Learning", "Education is about cultivating a growth mindset."),
        ("Student-Centred Approach", "Every decision is driven by what benefits students the most."),
    ],
    careers: "Join a movement to transform learning. We offer an innovative work environment with cutting-edge technology, opportunities for professional growth through training and certifications, the chance to make a meaningful impact, and competitive compensation.",
};

impl KnowledgeBase {
    pub fn mission_answer(&self) -> String {
        format!("**{} Mission:**\n{}", self.company_name, self.mission)
    }

    pub fn vision_answer(&self) -> String {
        format!("**{} Vision:**\n{}", self.company_name, self.vision)
    }

    /// Header line followed by one `• **name:** description` bullet per value, each newline-terminated.
    pub fn values_answer(&self) -> String {
        let mut text = format!("**{} Core Values:**\n", self.company_name);
        for (name, description) in self.core_values {
            text.push_str(&format!("• **{}:** {}\n", name, description));
        }
        text
    }

    pub fn careers_answer(&self) -> String {
        format!("**Why Work With {}:**\n{}", self.company_name, self.careers)
    }

    pub fn company_name_answer(&self) -> String {
        format!("The company name is **{}**.", self.company_name)
    }
}
