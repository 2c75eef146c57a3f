use serde::{Deserialize, Serialize};

use crate::domain::{chips::Chips, ParticipantId};

/// Сайд-пот: часть банка, на которую претендуют только некоторые игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// В порядке входных contributions (= порядок участников).
    pub eligible: Vec<ParticipantId>,
}

/// Посчитать сайд-поты из сумм, которые внесли игроки.
///
/// Вход: (участник, сколько суммарно внёс за раунд), в порядке рассадки.
/// Выход: слои от младшего к старшему. Сумма слоёв = сумма вкладов.
pub fn compute_side_pots(contributions: &[(ParticipantId, Chips)]) -> Vec<SidePot> {
    let mut levels: Vec<Chips> = contributions
        .iter()
        .map(|(_, c)| *c)
        .filter(|c| !c.is_zero())
        .collect();
    levels.sort();
    levels.dedup();

    let mut pots = Vec::new();
    let mut prev_level = Chips::ZERO;

    for level in levels {
        let level_diff = level - prev_level;

        // Все, у кого вклад >= level, участвуют в этом слое.
        let eligible: Vec<ParticipantId> = contributions
            .iter()
            .filter(|(_, c)| *c >= level)
            .map(|(id, _)| *id)
            .collect();

        pots.push(SidePot {
            amount: Chips(level_diff.0 * eligible.len() as u64),
            eligible,
        });

        prev_level = level;
    }

    pots
}

/// Разыграть банк по слоям.
///
/// Каждый слой делят поровну победители, которые на него претендуют; если
/// таких нет (слой только у проигравшего), слой возвращается его владельцам.
/// Нечётная фишка уходит последнему в порядке рассадки.
pub fn distribute(
    contributions: &[(ParticipantId, Chips)],
    winners: &[ParticipantId],
) -> Vec<(ParticipantId, Chips)> {
    let mut payouts: Vec<(ParticipantId, Chips)> =
        contributions.iter().map(|(id, _)| (*id, Chips::ZERO)).collect();

    for pot in compute_side_pots(contributions) {
        let mut takers: Vec<ParticipantId> = pot
            .eligible
            .iter()
            .copied()
            .filter(|id| winners.contains(id))
            .collect();
        if takers.is_empty() {
            takers = pot.eligible.clone();
        }

        let share = pot.amount.0 / takers.len() as u64;
        let remainder = pot.amount.0 % takers.len() as u64;

        for (i, id) in takers.iter().enumerate() {
            let mut prize = Chips(share);
            if i + 1 == takers.len() {
                prize += Chips(remainder);
            }
            if let Some(slot) = payouts.iter_mut().find(|(p, _)| p == id) {
                slot.1 += prize;
            }
        }
    }

    payouts
}
