use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: String,
}

impl Member {
    pub fn new(name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
        }
    }
}

/// Roster of the people working on a project, in join order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Team {
    members: Vec<Member>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_member(&mut self, member: Member) {
        self.members.push(member);
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }
}
