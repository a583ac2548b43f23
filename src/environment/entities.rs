use serde::{Deserialize, Serialize};

pub type PostId = u64;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: PostId,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: PostId,
    pub id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_wire_format() {
        let json = r#"[{
            "userId": 1,
            "id": 3,
            "title": "ea molestias",
            "body": "et iusto sed quo iure"
        }]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(
            posts,
            vec![Post {
                user_id: 1,
                id: 3,
                title: "ea molestias".to_string(),
                body: "et iusto sed quo iure".to_string(),
            }]
        );

        let json = r#"{"postId": 3, "id": 11, "name": "fugit", "email": "Veronica_Goodwin@timmothy.net", "body": "ut dolorum"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.post_id, 3);
        assert_eq!(comment.email, "Veronica_Goodwin@timmothy.net");
    }

    #[test]
    fn encoding_keeps_field_names() {
        let comment = Comment {
            post_id: 1,
            id: 2,
            name: "name".to_string(),
            email: "a@b.c".to_string(),
            body: "body".to_string(),
        };
        let encoded = serde_json::to_string(&comment).unwrap();
        assert!(encoded.contains("\"postId\":1"));
        let decoded: Comment = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, comment);

        let post = Post {
            user_id: 9,
            id: 4,
            title: "t".to_string(),
            body: "b".to_string(),
        };
        let decoded: Post = serde_json::from_value(serde_json::to_value(&post).unwrap()).unwrap();
        assert_eq!(decoded, post);
    }
}
