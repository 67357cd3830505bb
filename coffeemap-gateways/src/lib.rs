pub mod yandex;
