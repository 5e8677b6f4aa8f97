use crate::model::Question;
use rand::seq::SliceRandom;

/// Devuelve una copia de la secuencia en orden aleatorio.
pub fn shuffle<T>(mut items: Vec<T>) -> Vec<T> {
    items.shuffle(&mut rand::thread_rng());
    items
}

/// Baraja el orden de las preguntas y, dentro de cada una, el orden de sus
/// opciones, remapeando los índices de respuesta a sus nuevas posiciones.
/// Un índice de respuesta que apunte fuera de las opciones se descarta en
/// lugar de provocar un panic.
pub fn shuffle_questions(questions: Vec<Question>) -> Vec<Question> {
    let remapped = questions
        .into_iter()
        .map(|q| {
            let Question {
                id,
                question,
                options,
                answer,
                img,
            } = q;

            // Pares (índice original, opción) barajados
            let pairs: Vec<(usize, String)> =
                shuffle(options.into_iter().enumerate().collect());

            let answer = answer
                .into_iter()
                .filter_map(|a| pairs.iter().position(|(orig, _)| *orig == a))
                .collect();
            let options = pairs.into_iter().map(|(_, opt)| opt).collect();

            Question {
                id,
                question,
                options,
                answer,
                img,
            }
        })
        .collect();

    shuffle(remapped)
}
