// src/noyau/jetons.rs
//
// Normalisation + validation de caractères + découpe en jetons bruts.
//
// AUCUNE classification sémantique ici (nombre vs variable vs fonction) :
// c'est rpn.rs qui ré-examine la forme de chaque jeton au moment de le
// consommer (motif entier, identifiant suivi d'une ouvrante, etc.).

use super::erreurs::ErreurCompile;

/// Caractères qui terminent le tampon courant et deviennent chacun un jeton
/// d'un seul caractère. `~` y figure par complétude : il ne survit jamais à
/// la validation, il est synthétisé plus tard par le convertisseur.
const SEPARATEURS: &str = "+-*/^%()~,";

/// Classe de caractères acceptée après normalisation :
/// minuscules, chiffres, et + - * / ^ % ( ) , . _ < = >
const ACCEPTES: &str = "+-*/^%(),._<=>";

/// Normalise une formule brute : retire TOUS les blancs, passe en minuscules.
pub fn normalise(brut: &str) -> String {
    brut.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Valide la chaîne normalisée caractère par caractère.
/// La position rapportée est l'indice dans la chaîne NORMALISÉE.
pub fn valide(norme: &str) -> Result<(), ErreurCompile> {
    for (position, caractere) in norme.chars().enumerate() {
        let ok = caractere.is_ascii_lowercase()
            || caractere.is_ascii_digit()
            || ACCEPTES.contains(caractere);
        if !ok {
            return Err(ErreurCompile::CaractereInvalide {
                position,
                caractere,
            });
        }
    }
    Ok(())
}

/// Découpe la chaîne normalisée en jetons bruts (fragments de texte opaques).
/// Balayage gauche-droite : un séparateur vide le tampon accumulé puis sort
/// lui-même comme jeton; tout le reste s'accumule dans le tampon.
pub fn decoupe(norme: &str) -> Vec<String> {
    let mut jetons: Vec<String> = Vec::new();
    let mut tampon = String::new();

    for c in norme.chars() {
        if SEPARATEURS.contains(c) {
            if !tampon.is_empty() {
                jetons.push(std::mem::take(&mut tampon));
            }
            jetons.push(c.to_string());
        } else {
            tampon.push(c);
        }
    }

    if !tampon.is_empty() {
        jetons.push(tampon);
    }

    jetons
}

/// Motif littéral entier : [-+]?[0-9]+
/// (le signe ne survit jamais à la découpe, `+`/`-` étant des séparateurs,
/// mais le motif historique le tolère : on le garde tel quel)
pub fn est_entier(jeton: &str) -> bool {
    let chiffres = jeton.strip_prefix(['-', '+']).unwrap_or(jeton);
    !chiffres.is_empty() && chiffres.bytes().all(|b| b.is_ascii_digit())
}
