//! Rupee amounts spelled out with Indian grouping (crore, lakh, thousand,
//! hundred), e.g. `150000` -> "One Lakh Fifty Thousand Rupees Only".

use crate::core::error::AppError;

/// Largest amount that can be spelled: 999,99,99,999
pub const MAX_AMOUNT_IN_WORDS: u64 = 99_999_999_999;

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;
const THOUSAND: u64 = 1_000;
const HUNDRED: u64 = 100;

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell out a whole-rupee amount as "`{words}` Rupees Only"
///
/// Zero gives "Zero Rupees Only". Amounts above [`MAX_AMOUNT_IN_WORDS`] are
/// rejected.
pub fn amount_in_words(amount: u64) -> Result<String, AppError> {
    if amount > MAX_AMOUNT_IN_WORDS {
        return Err(AppError::validation(format!(
            "Amount {} exceeds the largest amount that can be written in words ({})",
            amount, MAX_AMOUNT_IN_WORDS
        )));
    }

    if amount == 0 {
        return Ok("Zero Rupees Only".to_string());
    }

    let mut words = Vec::new();
    push_indian_groups(amount, &mut words);

    Ok(format!("{} Rupees Only", words.join(" ")))
}

/// Spell out an invoice gross amount, rejecting negative values
pub fn convert_amount_to_words(gross_amount: i64) -> Result<String, AppError> {
    let amount = u64::try_from(gross_amount).map_err(|_| {
        AppError::validation(format!(
            "Cannot write a negative amount in words: {}",
            gross_amount
        ))
    })?;

    amount_in_words(amount)
}

/// Crores first, then lakhs, thousands, hundreds and the last two digits.
/// Zero groups are skipped. A crore count above 99 is itself spelled with
/// thousand and hundred grouping.
fn push_indian_groups(amount: u64, words: &mut Vec<&'static str>) {
    let crores = amount / CRORE;
    let mut rest = amount % CRORE;

    if crores > 0 {
        push_indian_groups(crores, words);
        words.push("Crore");
    }

    for (scale, name) in [(LAKH, "Lakh"), (THOUSAND, "Thousand")] {
        let group = rest / scale;
        rest %= scale;
        if group > 0 {
            push_below_hundred(group, words);
            words.push(name);
        }
    }

    let hundreds = rest / HUNDRED;
    rest %= HUNDRED;
    if hundreds > 0 {
        push_below_hundred(hundreds, words);
        words.push("Hundred");
    }

    push_below_hundred(rest, words);
}

fn push_below_hundred(n: u64, words: &mut Vec<&'static str>) {
    let n = n as usize;
    match n {
        0 => {}
        1..=19 => words.push(ONES[n]),
        _ => {
            words.push(TENS[n / 10]);
            if n % 10 > 0 {
                words.push(ONES[n % 10]);
            }
        }
    }
}
