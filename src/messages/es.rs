use super::Messages;

pub(super) fn table() -> Messages {
    Messages {
        required: "Requerido".into(),
        text_length: "Se requiere %length caracteres".into(),
        min_length: "Se requiere %min o más caracteres".into(),
        max_length: "Se requiere %max o menos caracteres".into(),
        range_length: "El texto debe contener entre %min a %max caracteres".into(),
        re: "El valor no coincide con la expresión regular %regex".into(),
        email: "Correo electrónico inválido".into(),
        number: "No es un número".into(),
        link: "Enlace inválido".into(),
        www_link: "Enlace www inválido".into(),
        http_link: "Enlace http inválido".into(),
        https_link: "Enlace https inválido".into(),
        ip: "IP inválida".into(),
        ipv4: "IPv4 inválida".into(),
        ipv6: "IPv6 inválida".into(),
        name: "Nombre personal inválido".into(),
        time: "Hora inválida".into(),
        time12: "Formato 12 horas inválido".into(),
        time24: "Formato 24 horas inválido".into(),
        only_numbers: "Solo números".into(),
        only_letters: "Solo letras".into(),
        only_alphanumeric: "Solo caracteres alfanuméricos".into(),
        not_contain: "No se admiten los siguientes caracteres %alphabet".into(),
        should_only_contain: "Solo se admiten los siguientes caracteres %alphabet".into(),
        must_contain_one: "Se requiere al menos uno de los siguientes caracteres: %alphabet"
            .into(),
        must_contain_min: "Se requiere al menos %min de los siguientes caracteres: %alphabet"
            .into(),
        min_value: "El valor no puede ser menor a %min".into(),
        max_value: "El valor no puede ser mayor a %max".into(),
        range_value: "El valor debe estar entre %min y %max".into(),
        number_pattern: "No coincide con el patrón %pattern".into(),
        compare: "No coinciden".into(),
    }
}
