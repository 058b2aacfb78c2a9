use std::io::{BufRead, Write};

use wordsmith_core::{OptionFlags, ProfileRecord, is_valid_birthdate, parse_keywords};

use crate::CliError;

const DATE_HINT: &str = "[-] You must enter 8 digits for birthday!";

/// Line-oriented questionnaire that fills a [`ProfileRecord`].
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask every profile question plus the three expansion switches.
    pub fn collect_profile(&mut self) -> Result<(ProfileRecord, OptionFlags), CliError> {
        let name = self.ask_until(
            "> First Name: ",
            "[-] You must enter a name at least!",
            |value| !value.is_empty(),
        )?;
        let surname = self.ask("> Surname: ")?;
        let nickname = self.ask("> Nickname: ")?;
        let birthdate = self.ask_date("> Birthdate (DDMMYYYY): ")?;
        writeln!(self.output)?;

        let partner_name = self.ask("> Partner's name: ")?;
        let partner_nickname = self.ask("> Partner's nickname: ")?;
        let partner_birthdate = self.ask_date("> Partner's birthdate (DDMMYYYY): ")?;
        writeln!(self.output)?;

        let child_name = self.ask("> Child's name: ")?;
        let child_nickname = self.ask("> Child's nickname: ")?;
        let child_birthdate = self.ask_date("> Child's birthdate (DDMMYYYY): ")?;
        writeln!(self.output)?;

        let pet = self.ask("> Pet's name: ")?;
        let company = self.ask("> Company name: ")?;
        writeln!(self.output)?;

        let wants_keywords =
            self.confirm("> Do you want to add some key words about the target? Y/[N]: ")?;
        let keywords = if wants_keywords {
            let line = self.ask(
                "> Please enter the words, separated by comma. [i.e. hacker,juice,black], spaces will be removed: ",
            )?;
            parse_keywords(&line)
        } else {
            Vec::new()
        };

        let flags = OptionFlags {
            special_chars: self
                .confirm("> Do you want to add special chars at the end of words? Y/[N]: ")?,
            numeric_suffixes: self
                .confirm("> Do you want to add some random numbers at the end of words? Y/[N]: ")?,
            leet: self.confirm("> Leet mode? (i.e. leet = 1337) Y/[N]: ")?,
        };

        let record = ProfileRecord {
            name,
            surname,
            nickname,
            birthdate,
            partner_name,
            partner_nickname,
            partner_birthdate,
            child_name,
            child_nickname,
            child_birthdate,
            pet,
            company,
            keywords,
        }
        .normalized()?;
        Ok((record, flags))
    }

    fn ask(&mut self, question: &str) -> Result<String, CliError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::InputClosed(question.trim_matches([' ', '>', ':']).to_string()));
        }
        Ok(line.trim().to_string())
    }

    fn ask_until(
        &mut self,
        question: &str,
        hint: &str,
        accept: impl Fn(&str) -> bool,
    ) -> Result<String, CliError> {
        loop {
            let answer = self.ask(question)?;
            if accept(&answer) {
                return Ok(answer);
            }
            writeln!(self.output, "{hint}")?;
        }
    }

    fn ask_date(&mut self, question: &str) -> Result<String, CliError> {
        self.ask_until(question, DATE_HINT, is_valid_birthdate)
    }

    fn confirm(&mut self, question: &str) -> Result<bool, CliError> {
        let answer = self.ask_until(question, "[-] Please answer y or n.", |value| {
            matches!(value, "" | "y" | "Y" | "n" | "N")
        })?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }
}
