use super::*;

impl Document {
    /// Comments recorded for a section, in source order.
    ///
    /// Looks only at the comment table, so a header that carried no keys still
    /// has an (empty) entry here even though it is not a data section.
    pub fn get_comments(&self, section: &str) -> Result<&[String]> {
        self.comments_for(normalize(section))
            .ok_or_else(|| SconfError::comments_not_found(section))
    }

    pub fn has_comments(&self, section: &str) -> bool {
        self.comments_for(normalize(section))
            .is_some_and(|comments| !comments.is_empty())
    }

    /// Empty a section's comment list; no-op when none are recorded.
    pub fn clear_comments(&mut self, section: &str) {
        if let Some(comments) = self.comments.get_mut(normalize(section)) {
            comments.clear();
        }
    }

    /// Append one comment line to a section, creating its slot if needed.
    pub fn add_comment(&mut self, section: &str, comment: &str) {
        self.comment_slot(normalize(section))
            .push(trim(comment).to_string());
    }
}
