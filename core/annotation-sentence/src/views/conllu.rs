use crate::sentence::AnnotatedSentence;

impl AnnotatedSentence {
    /// CoNLL-U block: `sent_id`/`text` comments, one line per word and a
    /// terminating blank line. `path` is prepended to the file name in
    /// `sent_id`.
    pub fn universal_dependency_format(&self, path: Option<&str>) -> String {
        let mut result = format!(
            "# sent_id = {}{}\n# text = {}\n",
            path.unwrap_or(""),
            self.file_name().unwrap_or(""),
            self.to_words()
        );
        let length = self.word_count();
        for (i, word) in self.words().iter().enumerate() {
            result.push_str(&format!(
                "{}\t{}\n",
                i + 1,
                word.universal_dependency_format(length)
            ));
        }
        result.push('\n');
        result
    }
}
