//! Batch timing metrics.
//!
//! Averages the per-process timing fields of completed processes.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Waiting (WT) | turnaround - cpu_time |
//! | Completion (CT) | end of last slice |
//! | Response (RT) | first dispatch - arrival |
//! | Turnaround (TAT) | completion - arrival |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MlqError, Result};
use crate::models::Process;

/// Mean timing metrics over a batch of completed processes (ticks).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean completion time.
    pub avg_completion_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
}

impl Averages {
    /// Averages over the first `n` processes in `processes`, in the order
    /// given.
    ///
    /// Accepts any sequence of process references, so both the completion
    /// order (`&[Process]`) and a re-sorted view (`Vec<&Process>`) work.
    /// `n` is clamped to the sequence length. Fails with
    /// [`MlqError::InvalidMetricsRequest`] when nothing remains to average
    /// or when one of the selected processes has not completed.
    ///
    /// Totals are accumulated in `i128`, so large batches near the clock
    /// limit cannot overflow.
    pub fn calculate<'a, I>(processes: I, n: usize) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Process>,
    {
        let mut total_wt: i128 = 0;
        let mut total_ct: i128 = 0;
        let mut total_rt: i128 = 0;
        let mut total_tat: i128 = 0;
        let mut count: usize = 0;

        for p in processes.into_iter().take(n) {
            let (Some(wt), Some(ct), Some(rt), Some(tat)) = (
                p.waiting_time,
                p.completion_time,
                p.response_time,
                p.turnaround_time,
            ) else {
                return Err(MlqError::InvalidMetricsRequest(format!(
                    "process '{}' has not completed",
                    p.id
                )));
            };
            total_wt += i128::from(wt);
            total_ct += i128::from(ct);
            total_rt += i128::from(rt);
            total_tat += i128::from(tat);
            count += 1;
        }

        if count == 0 {
            return Err(MlqError::InvalidMetricsRequest(
                "no completed processes to average".into(),
            ));
        }

        let count = count as f64;
        Ok(Self {
            avg_waiting_time: total_wt as f64 / count,
            avg_completion_time: total_ct as f64 / count,
            avg_response_time: total_rt as f64 / count,
            avg_turnaround_time: total_tat as f64 / count,
        })
    }
}

impl fmt::Display for Averages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WT={:.2}, CT={:.2}, RT={:.2}, TAT={:.2}",
            self.avg_waiting_time,
            self.avg_completion_time,
            self.avg_response_time,
            self.avg_turnaround_time
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(id: &str, arrival: i64, cpu: i64, start: i64, end: i64) -> Process {
        let mut p = Process::new(id, arrival, cpu, 1);
        p.mark_started(start);
        p.consume(cpu);
        p.mark_completed(end);
        p
    }

    fn sample() -> Vec<Process> {
        vec![
            completed("A", 0, 2, 0, 2), // wt 0, ct 2, rt 0, tat 2
            completed("B", 0, 3, 2, 5), // wt 2, ct 5, rt 2, tat 5
            completed("C", 1, 1, 6, 7), // wt 5, ct 7, rt 5, tat 6
        ]
    }

    #[test]
    fn test_averages_basic() {
        let avg = Averages::calculate(&sample(), 3).unwrap();
        assert!((avg.avg_waiting_time - 7.0 / 3.0).abs() < 1e-10);
        assert!((avg.avg_completion_time - 14.0 / 3.0).abs() < 1e-10);
        assert!((avg.avg_response_time - 7.0 / 3.0).abs() < 1e-10);
        assert!((avg.avg_turnaround_time - 13.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_averages_prefix() {
        let avg = Averages::calculate(&sample(), 2).unwrap();
        assert!((avg.avg_waiting_time - 1.0).abs() < 1e-10);
        assert!((avg.avg_completion_time - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_n_clamped() {
        let all = Averages::calculate(&sample(), 3).unwrap();
        let clamped = Averages::calculate(&sample(), 99).unwrap();
        assert_eq!(all, clamped);
    }

    #[test]
    fn test_empty_is_error() {
        let empty: Vec<Process> = Vec::new();
        let err = Averages::calculate(&empty, 0).unwrap_err();
        assert!(matches!(err, MlqError::InvalidMetricsRequest(_)));
        assert!(Averages::calculate(&sample(), 0).is_err());
        assert!(Averages::calculate(&empty, 5).is_err());
    }

    #[test]
    fn test_unfinished_is_error() {
        let mut list = sample();
        list.push(Process::new("D", 0, 4, 1));
        let err = Averages::calculate(&list, 4).unwrap_err();
        assert!(err.to_string().contains("'D'"));
        // Excluded by the prefix
        assert!(Averages::calculate(&list, 3).is_ok());
    }

    #[test]
    fn test_reordered_view() {
        let list = sample();
        // C, A, B
        let view: Vec<&Process> = vec![&list[2], &list[0], &list[1]];
        let avg = Averages::calculate(view, 2).unwrap();
        assert!((avg.avg_waiting_time - 2.5).abs() < 1e-10); // (5 + 0) / 2
        assert!((avg.avg_completion_time - 4.5).abs() < 1e-10); // (7 + 2) / 2
    }

    #[test]
    fn test_large_totals_do_not_overflow() {
        let big = i64::MAX / 2 + 1;
        let list = vec![
            completed("A", 0, big, 0, big),
            completed("B", 0, big, 0, big),
        ];
        let avg = Averages::calculate(&list, 2).unwrap();
        assert!((avg.avg_completion_time - big as f64).abs() < 1.0);
    }

    #[test]
    fn test_idempotent() {
        let list = sample();
        let first = Averages::calculate(&list, 3).unwrap();
        let second = Averages::calculate(&list, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_two_decimals() {
        let avg = Averages::calculate(&sample(), 3).unwrap();
        assert_eq!(avg.to_string(), "WT=2.33, CT=4.67, RT=2.33, TAT=4.33");
    }
}
