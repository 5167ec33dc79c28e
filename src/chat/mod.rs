// Message-exchange simulation. Each student's history sits behind its own
// Mutex so concurrent sends from different threads never interleave
// mid-append. Ordering across different student pairs is not guaranteed.

use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;

use crate::models::{CampusError, Student};

/// Per-student message histories for the chat simulation.
pub struct MessageBoard {
    histories: HashMap<String, Mutex<Vec<String>>>,
}

impl MessageBoard {
    pub fn new(students: &[Student]) -> Self {
        let histories = students
            .iter()
            .map(|s| (s.name.clone(), Mutex::new(Vec::new())))
            .collect();
        MessageBoard { histories }
    }

    /// Delivers one message, appending `"To {to}: ..."` to the sender's
    /// history and `"From {from}: ..."` to the receiver's.
    ///
    /// The two locks are taken in name order regardless of direction, so a
    /// simultaneous reply on the same pair cannot deadlock.
    pub fn send(&self, from: &str, to: &str, message: &str) -> Result<(), CampusError> {
        let sender = self
            .histories
            .get(from)
            .ok_or_else(|| CampusError::UnknownStudent(from.to_string()))?;
        let receiver = self
            .histories
            .get(to)
            .ok_or_else(|| CampusError::UnknownStudent(to.to_string()))?;

        let sender_entry = format!("To {}: {}", to, message);
        let receiver_entry = format!("From {}: {}", from, message);

        // A self-send touches a single history; taking the lock twice would
        // deadlock.
        if from == to {
            let mut log = sender.lock().expect("chat history lock poisoned");
            log.push(sender_entry);
            log.push(receiver_entry);
            return Ok(());
        }

        let (mut sender_log, mut receiver_log);
        if from < to {
            sender_log = sender.lock().expect("chat history lock poisoned");
            receiver_log = receiver.lock().expect("chat history lock poisoned");
        } else {
            receiver_log = receiver.lock().expect("chat history lock poisoned");
            sender_log = sender.lock().expect("chat history lock poisoned");
        }
        sender_log.push(sender_entry);
        receiver_log.push(receiver_entry);
        Ok(())
    }

    /// Records a friend request in the receiver's history.
    pub fn send_friend_request(&self, from: &str, to: &str) -> Result<(), CampusError> {
        if !self.histories.contains_key(from) {
            return Err(CampusError::UnknownStudent(from.to_string()));
        }
        let receiver = self
            .histories
            .get(to)
            .ok_or_else(|| CampusError::UnknownStudent(to.to_string()))?;
        let mut log = receiver.lock().expect("chat history lock poisoned");
        log.push(format!("Friend request from {}", from));
        Ok(())
    }

    /// Snapshot of a student's history; `None` for unknown names.
    pub fn history(&self, name: &str) -> Option<Vec<String>> {
        self.histories
            .get(name)
            .map(|m| m.lock().expect("chat history lock poisoned").clone())
    }

    /// Runs a batch of `(from, to, message)` sends on separate threads.
    /// Per-pair lock ordering guarantees every message lands exactly once;
    /// no ordering is promised between unrelated pairs.
    pub fn exchange_all(&self, messages: &[(String, String, String)]) -> Vec<CampusError> {
        let errors: Mutex<Vec<CampusError>> = Mutex::new(Vec::new());
        thread::scope(|scope| {
            for (from, to, message) in messages {
                let errors = &errors;
                scope.spawn(move || {
                    if let Err(e) = self.send(from, to, message) {
                        errors.lock().expect("error list lock poisoned").push(e);
                    }
                });
            }
        });
        errors.into_inner().expect("error list lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str) -> Student {
        Student {
            name: name.to_string(),
            age: 20,
            gender: "M".to_string(),
            year: 2,
            major: "CS".to_string(),
            gpa: 3.0,
            roommate_preferences: vec![],
            internships: vec![],
        }
    }

    #[test]
    fn send_updates_both_histories() {
        let students = vec![student("Alice"), student("Bob")];
        let board = MessageBoard::new(&students);
        board.send("Alice", "Bob", "hey").unwrap();
        assert_eq!(board.history("Alice").unwrap(), vec!["To Bob: hey"]);
        assert_eq!(board.history("Bob").unwrap(), vec!["From Alice: hey"]);
    }

    #[test]
    fn unknown_participants_are_rejected() {
        let students = vec![student("Alice")];
        let board = MessageBoard::new(&students);
        let err = board.send("Alice", "Ghost", "hi").unwrap_err();
        assert_eq!(err, CampusError::UnknownStudent("Ghost".to_string()));
    }

    #[test]
    fn friend_request_lands_in_receiver_history() {
        let students = vec![student("Alice"), student("Bob")];
        let board = MessageBoard::new(&students);
        board.send_friend_request("Alice", "Bob").unwrap();
        assert_eq!(
            board.history("Bob").unwrap(),
            vec!["Friend request from Alice"]
        );
        assert!(board.history("Alice").unwrap().is_empty());
    }

    #[test]
    fn concurrent_sends_lose_no_messages() {
        let students = vec![student("Alice"), student("Bob"), student("Carol")];
        let board = MessageBoard::new(&students);
        let mut batch = Vec::new();
        for i in 0..50 {
            batch.push(("Alice".to_string(), "Bob".to_string(), format!("a{}", i)));
            batch.push(("Bob".to_string(), "Alice".to_string(), format!("b{}", i)));
            batch.push(("Carol".to_string(), "Bob".to_string(), format!("c{}", i)));
        }
        let errors = board.exchange_all(&batch);
        assert!(errors.is_empty());
        // Alice: 50 sent + 50 received; Bob: 50 sent + 100 received.
        assert_eq!(board.history("Alice").unwrap().len(), 100);
        assert_eq!(board.history("Bob").unwrap().len(), 150);
        assert_eq!(board.history("Carol").unwrap().len(), 50);
    }
}
