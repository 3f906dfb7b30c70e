pub mod job_offer;
pub mod recommendation;
pub mod seeker;
