use super::*;

impl Document {
    /// Create an empty section. Adding an existing section is a no-op.
    pub fn add_section(&mut self, section: &str) {
        let name = normalize(section);
        if !self.data.contains_key(name) {
            self.data.insert(name.to_string(), Section::new());
        }
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.data.contains_key(normalize(section))
    }

    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.data
            .get(normalize(section))
            .is_some_and(|keys| keys.contains_key(normalize(key)))
    }

    /// Section names in insertion order.
    pub fn sections(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }

    /// All key/value pairs of a section.
    ///
    /// # Errors
    /// [`SconfError::SectionNotFound`] if the section does not exist.
    pub fn get_section(&self, section: &str) -> Result<&Section> {
        self.data
            .get(normalize(section))
            .ok_or_else(|| SconfError::section_not_found(section))
    }

    /// Same as [`Document::get_section`].
    pub fn get_section_key_pair(&self, section: &str) -> Result<&Section> {
        self.get_section(section)
    }

    pub fn keys(&self, section: &str) -> Result<Vec<&str>> {
        Ok(self.get_section(section)?.keys().map(String::as_str).collect())
    }

    pub fn get_value(&self, section: &str, key: &str) -> Result<&Value> {
        let keys = self.get_section(section)?;
        keys.get(normalize(key))
            .ok_or_else(|| SconfError::key_not_found(normalize(section), normalize(key)))
    }

    /// Assign `value` to `key`. Unlike parsing, this never creates the section.
    ///
    /// # Errors
    /// [`SconfError::SectionNotFound`] if the section does not exist yet.
    pub fn set_key(&mut self, section: &str, key: &str, value: impl Into<Value>) -> Result<()> {
        let keys = self
            .data
            .get_mut(normalize(section))
            .ok_or_else(|| SconfError::section_not_found(section))?;
        keys.insert(normalize(key).to_string(), value.into());
        Ok(())
    }

    /// Remove a section together with its comments.
    pub fn remove_section(&mut self, section: &str) -> Result<()> {
        let name = normalize(section);
        if self.data.shift_remove(name).is_none() {
            return Err(SconfError::section_not_found(section));
        }
        self.comments.shift_remove(name);
        Ok(())
    }

    pub fn remove_key(&mut self, section: &str, key: &str) -> Result<()> {
        let keys = self
            .data
            .get_mut(normalize(section))
            .ok_or_else(|| SconfError::section_not_found(section))?;
        match keys.shift_remove(normalize(key)) {
            Some(_) => Ok(()),
            None => Err(SconfError::key_not_found(normalize(section), normalize(key))),
        }
    }

    pub fn is_array_value(&self, section: &str, key: &str) -> Result<bool> {
        Ok(self.get_value(section, key)?.is_array())
    }

    pub fn is_scalar_value(&self, section: &str, key: &str) -> Result<bool> {
        Ok(self.get_value(section, key)?.is_scalar())
    }
}
