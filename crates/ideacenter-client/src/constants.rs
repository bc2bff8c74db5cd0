// API path constants for the IdeaCenter service

pub mod api_path {
    // User
    pub const USER_AUTHENTICATION: &str = "api/User/Authentication";
    pub const USER_CREATE: &str = "api/User/Create";

    // Idea
    pub const IDEA_CREATE: &str = "api/Idea/Create";
    pub const IDEA_ALL: &str = "api/Idea/All";
    pub const IDEA_EDIT: &str = "api/Idea/Edit";
    pub const IDEA_DELETE: &str = "api/Idea/Delete";
}

/// Query parameter carrying the idea identifier on edit and delete
pub const IDEA_ID_PARAM: &str = "ideaId";
