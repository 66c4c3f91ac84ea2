use crate::areas::repository::Repository;
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::Error;
use colored::Colorize;

impl Repository {
    pub fn log(&self, oneline: bool) -> anyhow::Result<()> {
        let head = self.refs().resolve_head()?;

        let Some(tip) = head.oid().cloned() else {
            writeln!(self.writer(), "No commits yet")?;
            return Ok(());
        };

        let mut curr_commit_oid = Some(tip.clone());
        while let Some(commit_oid) = curr_commit_oid {
            let commit = self
                .database()
                .parse_object_as_commit(&commit_oid)?
                .ok_or_else(|| Error::InvalidCommit {
                    oid: commit_oid.clone(),
                    reason: "object is not a commit".to_string(),
                })?;

            let decoration = if commit_oid == tip {
                Self::head_decoration(&head)
            } else {
                String::new()
            };

            if oneline {
                self.show_commit_oneline(&commit_oid, &commit, &decoration)?;
            } else {
                self.show_commit_medium(&commit_oid, &commit, &decoration)?;
            }

            curr_commit_oid = commit.parent().cloned();
            if !oneline && curr_commit_oid.is_some() {
                writeln!(self.writer())?;
            }
        }

        Ok(())
    }

    fn show_commit_medium(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
        decoration: &str,
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}{}",
            format!("commit {commit_oid}").yellow(),
            decoration
        )?;
        writeln!(self.writer(), "Author: {}", commit.author().display_name())?;
        writeln!(
            self.writer(),
            "Date:   {}",
            commit.author().readable_timestamp()
        )?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(
        &self,
        commit_oid: &ObjectId,
        commit: &Commit,
        decoration: &str,
    ) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{}{} {}",
            commit_oid.to_short_oid().yellow(),
            decoration,
            commit.short_message()
        )?;

        Ok(())
    }

    fn head_decoration(head: &Head) -> String {
        let label = match head.branch() {
            Some(branch) => format!(
                "{} -> {}",
                "HEAD".cyan().bold(),
                branch.as_ref().green().bold()
            ),
            None => "HEAD".cyan().bold().to_string(),
        };

        format!(" {}{}{}", "(".yellow(), label, ")".yellow())
    }
}
