//! Course-membership seam for the `course` data-access tier.

/// Resolves whether a principal belongs to the course-scoped resource it is
/// trying to read. Hosts wire in a real enrollment check; the default grants
/// the tier blanket access.
pub trait CourseMembership: Send + Sync {
    fn is_member(&self, user_id: &str, resource_type: &str, resource_owner_id: &str) -> bool;
}

/// Blanket grant: any course-tier role may read any course-scoped resource.
pub struct OpenCourseMembership;

impl CourseMembership for OpenCourseMembership {
    fn is_member(&self, _user_id: &str, _resource_type: &str, _resource_owner_id: &str) -> bool {
        true
    }
}
