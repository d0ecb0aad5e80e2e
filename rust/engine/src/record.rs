use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::cards::Card;
use crate::deal::{deal_hand, DealtHand};
use crate::errors::EngineError;
use crate::fairness::{commit, verify, Commitment};
use crate::seat::Seat;

/// Hole cards dealt to one seat.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatRecord {
    pub id: usize,
    pub hole: Vec<Card>,
}

/// Transcript of one dealt hand, serialized one per line (JSONL).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DealRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Published before the deal
    pub commitment: Commitment,
    /// Revealed after the hand; absent while the hand is live
    #[serde(default)]
    pub seed: Option<String>,
    /// Seats that received cards, in dealing order
    pub seats: Vec<SeatRecord>,
    /// Flop, turn and river
    pub board: Vec<Card>,
    /// Timestamp when the hand was dealt (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

/// Something an audit found wrong with a [`DealRecord`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuditIssue {
    #[error("seed has not been revealed")]
    SeedNotRevealed,
    #[error("seed does not match commitment {0}")]
    CommitmentMismatch(Commitment),
    #[error("seat {seat}: recorded {recorded:?}, replay dealt {replayed:?}")]
    HoleCardsMismatch {
        seat: usize,
        recorded: Vec<Card>,
        replayed: Vec<Card>,
    },
    #[error("board: recorded {recorded:?}, replay dealt {replayed:?}")]
    BoardMismatch {
        recorded: Vec<Card>,
        replayed: Vec<Card>,
    },
    #[error("replay failed: {0}")]
    Replay(EngineError),
}

impl DealRecord {
    /// Records `hand` with its seed revealed.
    pub fn new(hand_id: impl Into<String>, seed: &str, hand: &DealtHand) -> Self {
        let seats = hand
            .seats
            .iter()
            .filter_map(|s| {
                s.hole_pair().map(|hole| SeatRecord {
                    id: s.id,
                    hole: hole.to_vec(),
                })
            })
            .collect();
        Self {
            hand_id: hand_id.into(),
            commitment: commit(seed),
            seed: Some(seed.to_string()),
            seats,
            board: hand.board.to_vec(),
            ts: None,
        }
    }

    /// The record as published before the reveal.
    pub fn sealed(&self) -> Self {
        Self {
            seed: None,
            ..self.clone()
        }
    }

    /// Replays the hand from the revealed seed and reports every discrepancy.
    /// An empty result means the record is consistent with its commitment.
    pub fn audit(&self) -> Vec<AuditIssue> {
        let Some(seed) = self.seed.as_deref() else {
            return vec![AuditIssue::SeedNotRevealed];
        };
        let mut issues = Vec::new();
        if !verify(seed, self.commitment.as_str()) {
            issues.push(AuditIssue::CommitmentMismatch(self.commitment.clone()));
        }

        let table: Vec<Seat> = self.seats.iter().map(|s| Seat::new(s.id)).collect();
        let replay = match deal_hand(seed, table) {
            Ok(h) => h,
            Err(e) => {
                issues.push(AuditIssue::Replay(e));
                return issues;
            }
        };
        for (recorded, dealt) in self.seats.iter().zip(&replay.seats) {
            let replayed: Vec<Card> = dealt.hole_cards().iter().flatten().copied().collect();
            if recorded.hole != replayed {
                issues.push(AuditIssue::HoleCardsMismatch {
                    seat: recorded.id,
                    recorded: recorded.hole.clone(),
                    replayed,
                });
            }
        }
        if self.board != replay.board {
            issues.push(AuditIssue::BoardMismatch {
                recorded: self.board.clone(),
                replayed: replay.board.to_vec(),
            });
        }
        issues
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`DealRecord`]s to a JSONL file.
pub struct HandLogger {
    writer: Option<BufWriter<std::fs::File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    /// Opens `path` for appending. Ids continue after the highest sequence
    /// number already in the file for today's date.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let date = Utc::now().format("%Y%m%d").to_string();
        let seq = if path.exists() {
            last_seq(BufReader::new(File::open(path)?), &date)?
        } else {
            0
        };
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date,
            seq,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &DealRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

/// Highest `NNNNNN` among `hand_id`s of the form `{date}-NNNNNN`.
/// Lines that are not records are skipped.
fn last_seq<R: BufRead>(reader: R, date: &str) -> std::io::Result<u32> {
    let prefix = format!("{}-", date);
    let mut seq = 0;
    for line in reader.lines() {
        let line = line?;
        let Ok(v) = serde_json::from_str::<serde_json::Value>(&line) else {
            continue;
        };
        let n = v
            .get("hand_id")
            .and_then(|h| h.as_str())
            .and_then(|h| h.strip_prefix(&prefix))
            .and_then(|n| n.parse::<u32>().ok());
        if let Some(n) = n {
            seq = seq.max(n);
        }
    }
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat::seats;

    #[test]
    fn hand_ids_are_sequential() {
        let mut logger = HandLogger::with_seq_for_test("20240101");
        assert_eq!(logger.next_id(), "20240101-000001");
        assert_eq!(logger.next_id(), "20240101-000002");
    }

    #[test]
    fn last_seq_reads_todays_ids_only() {
        let log = concat!(
            "{\"hand_id\":\"20240101-000007\"}\n",
            "not json\n",
            "{\"hand_id\":\"20240102-000042\"}\n",
            "{\"hand_id\":\"20240102-000003\"}\n",
        );
        assert_eq!(last_seq(log.as_bytes(), "20240102").unwrap(), 42);
        assert_eq!(last_seq(log.as_bytes(), "20240103").unwrap(), 0);
    }

    #[test]
    fn fresh_record_audits_clean() {
        let hand = deal_hand("audit-me", seats(4)).unwrap();
        let record = DealRecord::new("20240101-000001", "audit-me", &hand);
        assert_eq!(record.seats.len(), 4);
        assert!(record.audit().is_empty());
    }

    #[test]
    fn sealed_record_cannot_be_audited() {
        let hand = deal_hand("s", seats(2)).unwrap();
        let sealed = DealRecord::new("x", "s", &hand).sealed();
        assert_eq!(sealed.audit(), vec![AuditIssue::SeedNotRevealed]);
    }

    #[test]
    fn swapped_seed_is_caught() {
        let hand = deal_hand("real", seats(2)).unwrap();
        let mut record = DealRecord::new("x", "real", &hand);
        record.seed = Some("fake".to_string());
        let issues = record.audit();
        assert!(matches!(issues[0], AuditIssue::CommitmentMismatch(_)));
        assert!(issues
            .iter()
            .any(|i| matches!(i, AuditIssue::BoardMismatch { .. })));
    }
}
